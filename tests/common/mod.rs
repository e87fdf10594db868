//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets an isolated temporary docs root so index builds never see
//! another test's files. The directory (and everything under it) is removed
//! when the fixture is dropped.

use rstest::fixture;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary docs root laid out as `<root>/<NAMESPACE>/<FUNCTION>.md`.
#[allow(dead_code)] // Helpers are shared across integration test crates.
pub struct TempDocsRoot {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TempDocsRoot {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp docs root");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a document, creating the namespace directory as needed.
    pub fn write_doc(&self, namespace: &str, file_name: &str, content: &str) {
        self.write_doc_bytes(namespace, file_name, content.as_bytes());
    }

    /// Write raw bytes (for not-quite-markdown and invalid-UTF-8 cases).
    pub fn write_doc_bytes(&self, namespace: &str, file_name: &str, content: &[u8]) {
        let dir = self.root.join(namespace);
        fs::create_dir_all(&dir).expect("Failed to create namespace dir");
        fs::write(dir.join(file_name), content).expect("Failed to write doc");
    }

    /// Create an empty directory directly under the root.
    pub fn create_dir(&self, name: &str) {
        fs::create_dir_all(self.root.join(name)).expect("Failed to create dir");
    }
}

/// Three documents across two namespaces, index order:
/// (PLAYER, GET_PLAYER_PED), (PLAYER, GET_WANTED_LEVEL), (VEHICLE, CREATE_VEHICLE).
#[fixture]
#[allow(dead_code)]
pub fn sample_docs() -> TempDocsRoot {
    let docs = TempDocsRoot::new();
    docs.write_doc(
        "PLAYER",
        "GET_WANTED_LEVEL.md",
        "## GET_WANTED_LEVEL\n\nReturns the wanted level for the given player.\n",
    );
    docs.write_doc(
        "PLAYER",
        "GET_PLAYER_PED.md",
        "## GET_PLAYER_PED\n\nReturns the ped handle.\n",
    );
    docs.write_doc(
        "VEHICLE",
        "CREATE_VEHICLE.md",
        "## CREATE_VEHICLE\n\nSpawns a vehicle at the given coordinates.\n",
    );
    docs
}
