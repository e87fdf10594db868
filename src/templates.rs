//! Embedded HTML for the documentation page.
//!
//! The page is a single self-contained template: inline styles, a
//! server-rendered document pane plus initial suggestion list, and a small
//! vanilla-JS widget that re-queries the suggest endpoint as the user types.

use crate::server::Suggestion;

/// Message shown in the document pane when the index has no entries.
pub(crate) const EMPTY_INDEX_MESSAGE: &str = "No functions were found.";

/// Placeholder shown when a selected document cannot be fetched.
pub(crate) const NOT_FOUND_MESSAGE: &str = "Not found";

const STYLE: &str = r#"
    :root {
        --bg: #0b0d10;
        --panel: #14171b;
        --border: #262b31;
        --text: #e6e8ea;
        --muted: #8b939c;
        --accent: #6bb2ff;
        --mono: "JetBrains Mono", "SF Mono", Consolas, monospace;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    }
    .layout {
        display: grid;
        grid-template-columns: minmax(0, 1fr) 320px;
        gap: 24px;
        max-width: 1100px;
        margin: 0 auto;
        padding: 32px 24px;
    }
    .doc-pane header { border-bottom: 1px solid var(--border); margin-bottom: 16px; }
    .doc-pane h1 { font-size: 20px; margin: 0 0 4px; }
    .doc-pane .current { color: var(--muted); font-family: var(--mono); font-size: 13px; margin: 0 0 12px; }
    .doc-pane pre {
        background: var(--panel);
        border: 1px solid var(--border);
        border-radius: 6px;
        padding: 16px;
        overflow-x: auto;
        font-family: var(--mono);
        font-size: 13px;
        white-space: pre-wrap;
    }
    .suggest-pane form { display: flex; gap: 8px; }
    .suggest-pane input {
        flex: 1;
        background: var(--panel);
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--text);
        padding: 8px 10px;
    }
    .suggest-pane button {
        background: var(--panel);
        border: 1px solid var(--border);
        border-radius: 6px;
        color: var(--text);
        padding: 8px 14px;
        cursor: pointer;
    }
    .suggest-pane button:disabled { color: var(--muted); cursor: default; }
    .status { color: var(--muted); font-size: 13px; min-height: 18px; margin: 8px 0; }
    #suggestions { list-style: none; margin: 8px 0 0; padding: 0; }
    #suggestions li { border-bottom: 1px solid var(--border); }
    #suggestions a {
        display: block;
        padding: 8px 4px;
        color: var(--accent);
        text-decoration: none;
        font-family: var(--mono);
        font-size: 13px;
    }
    #suggestions a span { display: block; color: var(--muted); font-size: 11px; }
"#;

const WIDGET: &str = r#"
    const form = document.getElementById('suggest-form');
    const input = document.getElementById('suggest-input');
    const button = document.getElementById('suggest-button');
    const list = document.getElementById('suggestions');
    const status = document.getElementById('suggest-status');
    let inFlight = false;

    function syncButton() {
        button.disabled = inFlight || input.value.trim() === '';
    }
    input.addEventListener('input', syncButton);
    syncButton();

    form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const query = input.value.trim();
        if (inFlight || query === '') return;
        inFlight = true;
        syncButton();
        status.textContent = '';
        try {
            const res = await fetch('/api/suggest?q=' + encodeURIComponent(query));
            if (!res.ok) {
                status.textContent = 'Search failed. Please try again.';
                return;
            }
            const data = await res.json();
            list.replaceChildren(...data.suggestions.map((s) => {
                const li = document.createElement('li');
                const a = document.createElement('a');
                a.href = s.href;
                a.textContent = s.title;
                const ns = document.createElement('span');
                ns.textContent = s.namespace;
                a.appendChild(ns);
                li.appendChild(a);
                return li;
            }));
            if (data.suggestions.length === 0) {
                status.textContent = 'No matches.';
            }
        } catch (err) {
            status.textContent = 'Network error. Check your connection.';
        } finally {
            inFlight = false;
            syncButton();
        }
    });
"#;

/// Escapes text for interpolation into HTML element content or attributes.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the initial suggestion list items.
pub(crate) fn suggestion_list_items(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    for s in suggestions {
        out.push_str(&format!(
            "<li><a href=\"{href}\">{title}<span>{namespace}</span></a></li>",
            href = escape_html(&s.href),
            title = escape_html(&s.title),
            namespace = escape_html(&s.namespace),
        ));
    }
    out
}

/// Renders the full document page.
///
/// `current` names the selected namespace/function for the header;
/// `doc_text` is the raw markdown (or a placeholder message) shown in the
/// document pane; `suggestion_items` is pre-rendered `<li>` markup.
pub(crate) fn render_page(
    current: Option<(&str, &str)>,
    doc_text: &str,
    suggestion_items: &str,
) -> String {
    let current_line = match current {
        Some((namespace, function_name)) => format!(
            "<p class=\"current\">{} / {}</p>",
            escape_html(namespace),
            escape_html(function_name),
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Native Function Docs</title>
    <style>{STYLE}</style>
</head>
<body>
<main class="layout">
    <section class="doc-pane">
        <header>
            <h1>Native Function Docs</h1>
            {current_line}
        </header>
        <article><pre>{doc}</pre></article>
    </section>
    <aside class="suggest-pane">
        <form id="suggest-form">
            <input id="suggest-input" type="text" placeholder="Search natives..." autocomplete="off">
            <button id="suggest-button" type="submit">Search</button>
        </form>
        <p id="suggest-status" class="status"></p>
        <ul id="suggestions">{suggestion_items}</ul>
    </aside>
</main>
<script>{WIDGET}</script>
</body>
</html>
"#,
        doc = escape_html(doc_text),
    )
}
