//! Recursive bitmap directory discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Find every directory under `root` (the root itself included) that
/// directly contains at least one bitmap file.
///
/// The walk is top-down with entries sorted by file name at every level, so
/// the result order is deterministic across platforms. Detection matches
/// the `.bmp` extension case-insensitively; a stray `X.BMP` still marks its
/// directory as bitmap-bearing. Directories whose bitmaps live only in
/// descendants are not returned themselves.
pub fn find_bitmap_dirs<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && contains_bitmaps(entry.path())? {
            dirs.push(entry.path().to_path_buf());
        }
    }

    Ok(dirs)
}

/// Check whether `dir` directly contains a file with a `.bmp` extension,
/// ignoring case.
fn contains_bitmaps(dir: &Path) -> Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("bmp"))
        {
            return Ok(true);
        }
    }
    Ok(false)
}
