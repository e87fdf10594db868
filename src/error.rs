//! Error handling types and utilities.

/// A specialized Result type for native-docs operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` at I/O boundaries. Nothing in this crate is fatal to
/// the host process; fallible paths degrade to empty results or not-found
/// placeholders at the HTTP layer.
pub type Result<T> = anyhow::Result<T>;
