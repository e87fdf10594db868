//! Native documentation index construction.
//!
//! The index is a flat, sorted list of every documented function found under
//! the docs root. The directory layout contract is
//! `<root>/<NAMESPACE>/<FUNCTION>.md`; anything violating the naming pattern
//! is silently excluded. Unreadable namespaces and files are skipped with a
//! warning rather than failing the whole build.

use crate::error::Result;
use crate::ident::{file_stem, is_markdown_file_name, is_valid_identifier};
use anyhow::Context;
use std::cmp::Ordering;
use std::path::Path;

/// One documented native function.
///
/// `namespace` plus the stem of `file_name` identify the entry; no duplicate
/// detection is performed, so colliding entries simply coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeEntry {
    /// Namespace directory the document lives in.
    pub namespace: String,
    /// File name within the namespace directory, extension included.
    pub file_name: String,
    /// First level-2 heading of the document, or the upper-cased stem.
    pub title: String,
}

impl NativeEntry {
    /// File name with the markdown extension stripped.
    pub fn stem(&self) -> &str {
        file_stem(&self.file_name)
    }
}

/// Extracts a document title from markdown content.
///
/// The first line of the form `## <text>` wins; scanning does not continue
/// past it, so a heading whose text trims to nothing falls back to the
/// upper-cased file stem just like a document with no heading at all.
fn parse_title(markdown: &str, file_name: &str) -> String {
    let heading = markdown.lines().find_map(|line| {
        let rest = line.strip_prefix("##")?;
        rest.starts_with(char::is_whitespace).then(|| rest.trim())
    });

    match heading {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => file_stem(file_name).to_uppercase(),
    }
}

/// Walks the docs root and builds the sorted index.
///
/// Only immediate subdirectories with identifier names are considered
/// namespaces, and only their immediate `<identifier>.md` files are indexed.
/// Fails only when the root itself cannot be listed.
pub async fn build_index(root: &Path) -> Result<Vec<NativeEntry>> {
    let mut namespaces = tokio::fs::read_dir(root)
        .await
        .with_context(|| format!("Failed to list docs root {}", root.display()))?;

    let mut entries = Vec::new();

    while let Some(ns_entry) = namespaces
        .next_entry()
        .await
        .with_context(|| format!("Failed to read docs root {}", root.display()))?
    {
        let Ok(namespace) = ns_entry.file_name().into_string() else {
            continue;
        };
        if !is_valid_identifier(&namespace) {
            continue;
        }
        match ns_entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", ns_entry.path().display(), e);
                continue;
            }
        }

        collect_namespace(&ns_entry.path(), &namespace, &mut entries).await;
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

/// Indexes one namespace directory, skipping anything unreadable.
async fn collect_namespace(dir: &Path, namespace: &str, entries: &mut Vec<NativeEntry>) {
    let mut files = match tokio::fs::read_dir(dir).await {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Skipping namespace {}: {}", dir.display(), e);
            return;
        }
    };

    loop {
        let file = match files.next_entry().await {
            Ok(Some(file)) => file,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Skipping rest of namespace {}: {}", dir.display(), e);
                break;
            }
        };

        let Ok(file_name) = file.file_name().into_string() else {
            continue;
        };
        if !is_markdown_file_name(&file_name) {
            continue;
        }
        match file.file_type().await {
            Ok(file_type) if file_type.is_file() => {}
            _ => continue,
        }

        let markdown = match tokio::fs::read_to_string(file.path()).await {
            Ok(markdown) => markdown,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file.path().display(), e);
                continue;
            }
        };

        entries.push(NativeEntry {
            namespace: namespace.to_string(),
            title: parse_title(&markdown, &file_name),
            file_name,
        });
    }
}

/// Index ordering: namespace first, then title within a namespace.
fn compare_entries(a: &NativeEntry, b: &NativeEntry) -> Ordering {
    a.namespace
        .cmp(&b.namespace)
        .then_with(|| a.title.cmp(&b.title))
}
