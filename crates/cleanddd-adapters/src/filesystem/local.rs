//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use cleanddd_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoreError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
