//! Process-wide memoized index with single-flight builds.
//!
//! The index is built at most once per process lifetime under normal
//! operation: the first caller starts the filesystem walk and every caller
//! arriving before it completes awaits the same shared future instead of
//! walking redundantly. A failed build reverts the cache to `Unbuilt` so the
//! next request retries rather than pinning the failure forever.

use crate::error::Result;
use crate::index::{NativeEntry, build_index};
use anyhow::anyhow;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared build future; errors are `String` so results clone through `Shared`.
type SharedBuild = Shared<BoxFuture<'static, std::result::Result<Arc<[NativeEntry]>, String>>>;

/// Build state machine for the memoized index.
enum BuildState {
    /// No build has run (or the last one failed, or was invalidated).
    Unbuilt,
    /// A build is in flight; all callers await this same future.
    Building(SharedBuild),
    /// The index is ready and immutable for the rest of the process lifetime
    /// unless [`IndexCache::invalidate`] is called.
    Ready(Arc<[NativeEntry]>),
}

/// Memoized, single-flight index over a docs root.
pub struct IndexCache {
    root: PathBuf,
    state: Mutex<BuildState>,
}

impl IndexCache {
    /// Create a cold cache over `root`. No filesystem access happens until
    /// the first [`get`](Self::get).
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            state: Mutex::new(BuildState::Unbuilt),
        }
    }

    /// The docs root this cache indexes.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Get the index, building it on first access.
    ///
    /// Concurrent first-callers all await the one in-flight build and end up
    /// holding the same `Arc`.
    pub async fn get(&self) -> Result<Arc<[NativeEntry]>> {
        let shared = {
            let mut state = self.state.lock().await;
            match &*state {
                BuildState::Ready(index) => return Ok(index.clone()),
                BuildState::Building(shared) => shared.clone(),
                BuildState::Unbuilt => {
                    let root = self.root.clone();
                    tracing::info!("Building native index from {}", root.display());
                    let build: BoxFuture<'static, std::result::Result<Arc<[NativeEntry]>, String>> =
                        Box::pin(async move {
                            build_index(&root)
                                .await
                                .map(Arc::from)
                                .map_err(|e| e.to_string())
                        });
                    let shared = build.shared();
                    *state = BuildState::Building(shared.clone());
                    shared
                }
            }
        };

        let result = shared.await;

        // An invalidate() that raced the build leaves the state Unbuilt; the
        // completed result is returned to this caller but not stored.
        let mut state = self.state.lock().await;
        match result {
            Ok(index) => {
                if matches!(&*state, BuildState::Building(_)) {
                    tracing::debug!("Indexed {} native functions", index.len());
                    *state = BuildState::Ready(index.clone());
                }
                Ok(index)
            }
            Err(e) => {
                if matches!(&*state, BuildState::Building(_)) {
                    *state = BuildState::Unbuilt;
                }
                Err(anyhow!(e))
            }
        }
    }

    /// Drop any built index so the next [`get`](Self::get) rebuilds.
    ///
    /// An in-flight build is not cancelled; its result is discarded instead
    /// of being stored.
    pub async fn invalidate(&self) {
        *self.state.lock().await = BuildState::Unbuilt;
    }
}
