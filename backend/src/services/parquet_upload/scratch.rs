//! Per-request scratch copy of an uploaded file.
//!
//! The Parquet reader wants a file handle, so each upload is staged on disk
//! under a unique name. `ScratchFile` owns that path: dropping it removes the
//! file, whether the request succeeded or failed.

use log::{debug, warn};
use regex::Regex;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::LazyLock;
use tempfile::{Builder, NamedTempFile};
use uuid::Uuid;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.-]").unwrap());

/// Replaces every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}

#[derive(Debug)]
pub struct ScratchFile {
    file: Option<NamedTempFile>,
}

impl ScratchFile {
    /// Writes `bytes` to a new file in `dir`.
    ///
    /// The name is `<uuid>-<random>-<sanitized original name>`; the file is
    /// created exclusively, so an existing file is never reused.
    pub fn stage(dir: &Path, original_name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let prefix = format!("{}-", Uuid::new_v4());
        let suffix = format!("-{}", sanitize_file_name(original_name));
        let mut file = Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(dir)?;

        file.write_all(bytes)?;
        file.flush()?;
        let scratch = ScratchFile { file: Some(file) };
        debug!("Staged {} bytes at {}", bytes.len(), scratch.path_display());
        Ok(scratch)
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path())
    }

    /// Opens an independent read handle on the staged file.
    pub fn reopen(&self) -> std::io::Result<File> {
        match &self.file {
            Some(file) => file.reopen(),
            None => Err(std::io::Error::new(
                ErrorKind::NotFound,
                "scratch file already released",
            )),
        }
    }

    /// Removes the file now instead of at the end of the scope.
    pub fn finish(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };
        let path = file.path().to_path_buf();
        match file.close() {
            Ok(()) => debug!("Removed scratch file {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Scratch file {} was already gone", path.display())
            }
            Err(e) => warn!("Failed to remove scratch file {}: {}", path.display(), e),
        }
    }

    fn path_display(&self) -> String {
        self.path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        self.release();
    }
}
