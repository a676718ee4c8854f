//! Mapping candidate paths under the scan root to patch paths under the
//! patch root.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PatchError, PatchResult};

/// Compute the patch path for `file`.
///
/// The components `file` shares with `scan_root` are dropped, the remainder
/// is joined onto `patch_root`, and `suffix` is appended to the final
/// component as-is (so `d.object` becomes `d.object.patch`, the original
/// extension is kept).
///
/// Comparison is component-wise, so `/a/b/` and `/a/b` are the same root.
pub fn map_output_path(
    scan_root: &Path,
    patch_root: &Path,
    file: &Path,
    suffix: &str,
) -> PatchResult<PathBuf> {
    let outside = || PatchError::OutsideRoot {
        path: file.to_path_buf(),
        root: scan_root.to_path_buf(),
    };

    let shared = file
        .components()
        .zip(scan_root.components())
        .take_while(|(f, r)| f == r)
        .count();

    if shared < scan_root.components().count() {
        return Err(outside());
    }

    let mut rest = file.components().skip(shared).peekable();
    if rest.peek().is_none() {
        return Err(outside());
    }

    let mut out = patch_root.to_path_buf();
    for component in rest {
        out.push(component);
    }

    let mut raw: OsString = out.into_os_string();
    raw.push(suffix);
    Ok(PathBuf::from(raw))
}

/// Create every missing directory above `path`.
///
/// Already-existing directories are fine; anything else that stops the
/// directory from being created is a [`PatchError::DirectoryCreate`].
pub fn ensure_parent_dir(path: &Path) -> PatchResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| PatchError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
