//! Single-document fetch and page selection.

use crate::ident::{file_stem, resolve_file_path};
use crate::index::NativeEntry;
use std::path::Path;

/// Reads the raw markdown for one documented function.
///
/// Returns `None` for an invalid identifier (no filesystem access), a
/// missing file, or any read failure; callers cannot distinguish the three.
pub async fn get_document(root: &Path, namespace: &str, function_name: &str) -> Option<String> {
    let path = resolve_file_path(root, namespace, function_name)?;
    tokio::fs::read_to_string(path).await.ok()
}

/// Which document the page should display.
///
/// Modeled explicitly rather than via truthiness fallbacks so the
/// default-selection rules are testable in isolation from request parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSelection {
    /// The index is empty; there is nothing to display.
    Empty,
    /// Both query parameters were supplied by the caller. The pair is kept
    /// even when it will not resolve, so the page can show a not-found
    /// placeholder for it.
    Explicit {
        namespace: String,
        function_name: String,
    },
    /// Fallback to the first index entry when either parameter is missing.
    Default {
        namespace: String,
        function_name: String,
    },
}

impl DocSelection {
    /// Resolve the requested `ns`/`fn` pair against the index.
    pub fn resolve(index: &[NativeEntry], ns: Option<&str>, func: Option<&str>) -> Self {
        if let (Some(ns), Some(func)) = (ns, func) {
            return Self::Explicit {
                namespace: ns.to_string(),
                function_name: func.to_string(),
            };
        }

        match index.first() {
            Some(entry) => Self::Default {
                namespace: entry.namespace.clone(),
                function_name: file_stem(&entry.file_name).to_string(),
            },
            None => Self::Empty,
        }
    }

    /// The selected (namespace, function) pair, if any.
    pub fn target(&self) -> Option<(&str, &str)> {
        match self {
            Self::Empty => None,
            Self::Explicit {
                namespace,
                function_name,
            }
            | Self::Default {
                namespace,
                function_name,
            } => Some((namespace, function_name)),
        }
    }
}
