//! Flat bitmap scanning

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::utils::path::to_relative;

/// Scan `asset_root/rel_dir` for `.bmp` files and write one asset-relative
/// path per line to `out`, returning the number of entries written.
///
/// The listing is non-recursive and the extension match is case-sensitive
/// (`sprite.BMP` does not count). Entries are sorted by path ascending.
/// A missing directory or one without bitmaps logs a warning and returns 0;
/// neither is an error.
pub fn scan_bmp_dir<W: Write>(asset_root: &Path, rel_dir: &Path, out: &mut W) -> Result<usize> {
    let full_dir = asset_root.join(rel_dir);

    if !full_dir.is_dir() {
        tracing::warn!("directory not found: {}", full_dir.display());
        return Ok(0);
    }

    let mut bmp_files: Vec<_> = std::fs::read_dir(&full_dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "bmp"))
        .collect();
    bmp_files.sort();

    if bmp_files.is_empty() {
        tracing::warn!("no BMP files found in {}", full_dir.display());
        return Ok(0);
    }

    for bmp in &bmp_files {
        writeln!(out, "{}", to_relative(bmp, asset_root))?;
    }

    Ok(bmp_files.len())
}
