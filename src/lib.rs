pub mod cache;
pub mod cli;
pub mod docs;
pub mod error;
pub mod ident;
pub mod index;
pub mod search;
pub mod server;
pub mod templates;
pub mod tracing;

pub use cache::IndexCache;
pub use index::NativeEntry;
pub use server::{AppState, Suggestion, create_router};
