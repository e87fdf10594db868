//! HTTP routes: the document page and the suggestion endpoint.

use crate::cache::IndexCache;
use crate::docs::{DocSelection, get_document};
use crate::index::NativeEntry;
use crate::search::search;
use crate::templates::{EMPTY_INDEX_MESSAGE, NOT_FOUND_MESSAGE, render_page, suggestion_list_items};
use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Characters escaped in href components. Matches `encodeURIComponent`:
/// everything but alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    cache: Arc<IndexCache>,
    suggest_limit: usize,
}

impl AppState {
    pub fn new(root: PathBuf, suggest_limit: usize) -> Self {
        Self {
            cache: Arc::new(IndexCache::new(root)),
            suggest_limit,
        }
    }

    /// The memoized index cache (exposed for embedding and tests).
    pub fn cache(&self) -> &Arc<IndexCache> {
        &self.cache
    }

    /// Current index, degraded to empty on build failure.
    ///
    /// The error is logged once per failed attempt; every endpoint treats an
    /// unbuildable index the same as an empty one.
    async fn index(&self) -> Arc<[NativeEntry]> {
        match self.cache.get().await {
            Ok(index) => index,
            Err(e) => {
                tracing::error!("Index build failed: {e:#}");
                Arc::from(Vec::new())
            }
        }
    }
}

/// One entry of the suggest endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub namespace: String,
    pub title: String,
    /// File stem of the documented function.
    pub function_name: String,
    /// Deep link to the document page, query components percent-encoded.
    pub href: String,
}

impl Suggestion {
    fn from_entry(entry: &NativeEntry) -> Self {
        Self {
            namespace: entry.namespace.clone(),
            title: entry.title.clone(),
            function_name: entry.stem().to_string(),
            href: entry_href(entry),
        }
    }
}

/// Builds the `/?ns=..&fn=..` deep link for an entry.
fn entry_href(entry: &NativeEntry) -> String {
    format!(
        "/?ns={}&fn={}",
        utf8_percent_encode(&entry.namespace, COMPONENT),
        utf8_percent_encode(entry.stem(), COMPONENT),
    )
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<Suggestion>,
}

/// GET /api/suggest - scored typeahead suggestions.
async fn suggest_handler(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestResponse> {
    let index = state.index().await;
    let suggestions = search(&index, &params.q, state.suggest_limit)
        .into_iter()
        .map(Suggestion::from_entry)
        .collect();

    Json(SuggestResponse { suggestions })
}

#[derive(Debug, Deserialize)]
struct PageParams {
    ns: Option<String>,
    #[serde(rename = "fn")]
    func: Option<String>,
}

/// GET / - the document page.
///
/// Renders the selected (or default) document and an initial suggestion
/// list. Bad input degrades to a placeholder; the page load itself never
/// fails.
async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let index = state.index().await;
    let selection = DocSelection::resolve(&index, params.ns.as_deref(), params.func.as_deref());

    let doc_text = match selection.target() {
        Some((namespace, function_name)) => {
            get_document(state.cache.root(), namespace, function_name)
                .await
                .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string())
        }
        None => EMPTY_INDEX_MESSAGE.to_string(),
    };

    let initial: Vec<Suggestion> = search(&index, "", state.suggest_limit)
        .into_iter()
        .map(Suggestion::from_entry)
        .collect();

    Html(render_page(
        selection.target(),
        &doc_text,
        &suggestion_list_items(&initial),
    ))
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/suggest", get(suggest_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn href_components_are_percent_encoded() {
        let entry = NativeEntry {
            namespace: "PLAYER".to_string(),
            file_name: "GET_WANTED_LEVEL.md".to_string(),
            title: "GET_WANTED_LEVEL".to_string(),
        };
        check!(entry_href(&entry) == "/?ns=PLAYER&fn=GET_WANTED_LEVEL");
    }

    #[test]
    fn href_encoding_matches_encode_uri_component() {
        // Identifiers can never contain these, but the encoder must still
        // treat them the way the client-side decoder expects.
        let entry = NativeEntry {
            namespace: "a b".to_string(),
            file_name: "x/y.md".to_string(),
            title: "T".to_string(),
        };
        check!(entry_href(&entry) == "/?ns=a%20b&fn=x%2Fy");
    }

    #[test]
    fn suggestion_serializes_camel_case() {
        let json = serde_json::to_string(&Suggestion {
            namespace: "PLAYER".to_string(),
            title: "GET_WANTED_LEVEL".to_string(),
            function_name: "GET_WANTED_LEVEL".to_string(),
            href: "/?ns=PLAYER&fn=GET_WANTED_LEVEL".to_string(),
        })
        .unwrap();
        check!(json.contains("\"functionName\":\"GET_WANTED_LEVEL\""));
        check!(!json.contains("function_name"));
    }
}
