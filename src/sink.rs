//! On-disk file sink.

use crate::driver::FileSink;
use crate::model::relative_source_path;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = "java";

/// Writes each builder to `<root>/<package dirs>/<Simple>.java`.
///
/// Text goes to a temporary file next to the target first and is then
/// renamed into place, so a failed write leaves any previous file intact.
/// Writing an existing target replaces it.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a target type is written to.
    ///
    /// Fails with `InvalidInput` when a segment of `target` is not a plain
    /// path component, so nothing is ever written outside the root.
    pub fn path_for(&self, target: &str) -> std::io::Result<PathBuf> {
        Ok(self.root.join(relative_source_path(target, SOURCE_EXTENSION)?))
    }
}

impl FileSink for DirectorySink {
    fn write_source(&mut self, target: &str, text: &str) -> std::io::Result<()> {
        let path = self.path_for(target)?;
        let dir = path.parent().unwrap_or(self.root.as_path());
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::Builder::new()
            .prefix(".builder_")
            .tempfile_in(dir)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        file.persist(&path).map_err(|e| e.error)?;

        debug!(path = %path.display(), bytes = text.len(), "Wrote generated source");
        Ok(())
    }
}
