//! Identifier validation and traversal-safe path resolution.
//!
//! Namespace and function names are the only user-controlled strings that
//! ever reach the filesystem, and this module is the sole defense against
//! path traversal. Validation is an explicit character-class scan so the
//! accepted set is auditable without reference to a pattern engine.

use std::path::{Path, PathBuf};

/// Returns true iff `s` is non-empty and consists only of ASCII letters,
/// digits, and underscores.
///
/// Anything else — separators, dots, percent escapes, whitespace, non-ASCII —
/// is rejected outright.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Returns true iff `name` is `<identifier>.md` with a case-insensitive
/// extension.
pub fn is_markdown_file_name(name: &str) -> bool {
    let Some(stem) = strip_md_extension(name) else {
        return false;
    };
    is_valid_identifier(stem)
}

/// Strips a trailing markdown extension case-insensitively.
///
/// Returns the name unchanged when there is no such extension, so callers
/// can use this on already-stemmed input.
pub fn file_stem(name: &str) -> &str {
    strip_md_extension(name).unwrap_or(name)
}

fn strip_md_extension(name: &str) -> Option<&str> {
    if name.len() > 3 && name.is_char_boundary(name.len() - 3) {
        let (stem, ext) = name.split_at(name.len() - 3);
        if ext.eq_ignore_ascii_case(".md") {
            return Some(stem);
        }
    }
    None
}

/// Resolves `root/<namespace>/<function_name>.md`, but only when both
/// components pass [`is_valid_identifier`]. No filesystem access happens
/// here; an invalid component yields `None` before any path is formed.
pub fn resolve_file_path(root: &Path, namespace: &str, function_name: &str) -> Option<PathBuf> {
    if !is_valid_identifier(namespace) || !is_valid_identifier(function_name) {
        return None;
    }

    Some(root.join(namespace).join(format!("{function_name}.md")))
}
