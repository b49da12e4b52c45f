//! Read-only access to the collector's output folder.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::ProductRecord;

const PRODUCT_FILE: &str = "product.json";

/// Source of description records, keyed by product code.
pub trait RecordStore {
    /// Returns `Ok(None)` when no record exists for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a record exists but cannot be read or parsed.
    fn fetch(&self, code: &str) -> Result<Option<ProductRecord>, StoreError>;

    /// Codes with a record, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the store cannot be listed.
    fn list_codes(&self) -> Result<Vec<String>, StoreError>;
}

/// Records laid out as `<root>/<code>/product.json`, with the collector's
/// older `JSON/v<code>` and `JSON/<code>` layouts as fallbacks.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds the `product.json` for a code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCode`] for a blank code.
    pub fn locate(&self, code: &str) -> Result<Option<PathBuf>, StoreError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(StoreError::EmptyCode);
        }
        if code.contains(['/', '\\']) || code.contains("..") {
            tracing::warn!(code, "rejecting product code with path components");
            return Ok(None);
        }

        let candidates = [
            self.root.join(code).join(PRODUCT_FILE),
            self.root.join("JSON").join(format!("v{code}")).join(PRODUCT_FILE),
            self.root.join("JSON").join(code).join(PRODUCT_FILE),
        ];
        Ok(candidates.into_iter().find(|p| p.is_file()))
    }
}

impl RecordStore for DirectoryStore {
    fn fetch(&self, code: &str) -> Result<Option<ProductRecord>, StoreError> {
        let Some(path) = self.locate(code)? else {
            tracing::debug!(code, root = %self.root.display(), "no description record");
            return Ok(None);
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let record = ProductRecord::from_json_str(&raw).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Some(record))
    }

    fn list_codes(&self) -> Result<Vec<String>, StoreError> {
        let io_err = |e| StoreError::Io {
            path: self.root.display().to_string(),
            source: e,
        };

        let mut codes = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_dir() && path.join(PRODUCT_FILE).is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    codes.push(name.to_string());
                }
            }
        }
        codes.sort();
        Ok(codes)
    }
}

/// Directory holding the running binary, used as the last search base for
/// [`resolve_out_root`].
#[must_use]
pub fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Picks the collector output folder.
///
/// `explicit` (from `SKUREG_OUT_ROOT` or a CLI flag) wins when it is a
/// directory. Otherwise, in order: `kv_mvp/out`, `../kv_mvp/out` and
/// `../kv/kv_mvp/out` under `cwd`, then `kv_mvp/out`, `../kv_mvp/out` and
/// `../kv_mvp/kv_mvp/out` under `exe_dir`.
///
/// # Errors
///
/// Returns [`StoreError::OutRootNotFound`] when no candidate exists.
pub fn resolve_out_root(
    explicit: Option<&Path>,
    cwd: &Path,
    exe_dir: Option<&Path>,
) -> Result<PathBuf, StoreError> {
    let from_cwd = [
        cwd.join("kv_mvp").join("out"),
        cwd.join("..").join("kv_mvp").join("out"),
        cwd.join("..").join("kv").join("kv_mvp").join("out"),
    ];
    let from_exe = exe_dir.into_iter().flat_map(|dir| {
        [
            dir.join("kv_mvp").join("out"),
            dir.join("..").join("kv_mvp").join("out"),
            dir.join("..").join("kv_mvp").join("kv_mvp").join("out"),
        ]
    });
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(from_cwd)
        .chain(from_exe);

    for candidate in candidates {
        if candidate.is_dir() {
            return Ok(candidate);
        }
        tracing::debug!(path = %candidate.display(), "out root candidate missing");
    }
    Err(StoreError::OutRootNotFound)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
