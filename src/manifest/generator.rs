//! Manifest generation
//!
//! Each category manifest is rebuilt from scratch on every run: the output
//! file is truncated before scanning starts, so it always reflects exactly
//! one complete generation attempt even when the category is empty.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::manifest::category::{Category, Layout};
use crate::scan::{find_bitmap_dirs, scan_bmp_dir};
use crate::utils::path::to_relative;

/// Subdirectory of the asset root that receives generated manifests.
pub const OUTPUT_DIR: &str = "data/resource_lists";

/// Entry count for one scanned directory.
#[derive(Debug, Clone)]
pub struct DirCount {
    /// Display label: the sprite subdirectory name, or the asset-relative
    /// directory for recursive categories.
    pub dir: String,
    /// Number of manifest entries written for it.
    pub count: usize,
}

/// Result of generating one category manifest.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// The category that was generated.
    pub category: Category,
    /// The manifest file that was written.
    pub output: PathBuf,
    /// Scanned directories with their entry counts.
    pub directories: Vec<DirCount>,
    /// Warning messages (missing category directory and the like).
    pub warnings: Vec<String>,
}

impl CategoryReport {
    fn new(category: Category, output: PathBuf) -> Self {
        CategoryReport {
            category,
            output,
            directories: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Total number of entries written across all scanned directories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.directories.iter().map(|d| d.count).sum()
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Summary of a full generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Directory the manifests were written into.
    pub output_dir: PathBuf,
    /// One report per category, in generation order.
    pub reports: Vec<CategoryReport>,
}

impl GenerationSummary {
    /// Total number of entries written across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.reports.iter().map(CategoryReport::total).sum()
    }
}

/// Generate the manifest for a single category.
///
/// The output file `<output_dir>/<category>.txt` is truncated up front and
/// flushed before returning. A missing category directory leaves it empty
/// and records a warning in the report; it is not an error.
pub fn generate_category(
    asset_root: &Path,
    output_dir: &Path,
    category: Category,
) -> Result<CategoryReport> {
    let output = output_dir.join(category.manifest_name());
    tracing::info!("generating {}", output.display());

    let mut report = CategoryReport::new(category, output.clone());
    let mut out = BufWriter::new(File::create(&output)?);

    let category_dir = asset_root.join(category.graphic_dir());
    if !category_dir.is_dir() {
        report.warn(format!("directory not found: {}", category_dir.display()));
        out.flush()?;
        return Ok(report);
    }

    match category.layout() {
        Layout::Flat => {
            let count = scan_bmp_dir(asset_root, &category.graphic_dir(), &mut out)?;
            report.directories.push(DirCount {
                dir: category.name().to_string(),
                count,
            });
        }
        Layout::Subdirs => {
            for subdir in sorted_subdirs(&category_dir)? {
                let rel = subdir
                    .strip_prefix(asset_root)
                    .map_err(|e| Error::InvalidPath(e.to_string()))?;
                let count = scan_bmp_dir(asset_root, rel, &mut out)?;
                report.directories.push(DirCount {
                    dir: subdir
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    count,
                });
            }
        }
        Layout::Recursive => {
            for dir in find_bitmap_dirs(&category_dir)? {
                let rel = dir
                    .strip_prefix(asset_root)
                    .map_err(|e| Error::InvalidPath(e.to_string()))?;
                let count = scan_bmp_dir(asset_root, rel, &mut out)?;
                report.directories.push(DirCount {
                    dir: to_relative(&dir, asset_root),
                    count,
                });
            }
        }
    }

    out.flush()?;
    Ok(report)
}

/// Generate every category manifest under `<asset_root>/data/resource_lists/`.
///
/// The asset root must exist; anything below it may be missing and only
/// degrades the corresponding manifest to empty. Categories run in a fixed
/// order: characters, enemies, objects, faces, tiles, particles.
pub fn generate_all(asset_root: &Path) -> Result<GenerationSummary> {
    if !asset_root.is_dir() {
        return Err(Error::AssetRootNotFound {
            path: asset_root.to_path_buf(),
        });
    }

    let output_dir = asset_root.join(OUTPUT_DIR);
    std::fs::create_dir_all(&output_dir)?;

    tracing::info!("scanning resources in {}", asset_root.display());

    let mut reports = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        reports.push(generate_category(asset_root, &output_dir, category)?);
    }

    Ok(GenerationSummary {
        output_dir,
        reports,
    })
}

/// Immediate subdirectories of `dir`, sorted by path.
fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();
    Ok(subdirs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn setup_output(root: &Path) -> PathBuf {
        let output_dir = root.join(OUTPUT_DIR);
        fs::create_dir_all(&output_dir).unwrap();
        output_dir
    }

    #[test]
    fn test_faces_manifest_content() {
        let temp = TempDir::new().unwrap();
        let faces = temp.path().join("graphic/faces");
        fs::create_dir_all(&faces).unwrap();
        fs::write(faces.join("b.bmp"), b"").unwrap();
        fs::write(faces.join("a.bmp"), b"").unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Faces).unwrap();

        assert_eq!(report.total(), 2);
        let text = fs::read_to_string(output_dir.join("faces.txt")).unwrap();
        assert_eq!(text, "graphic/faces/a.bmp\ngraphic/faces/b.bmp\n");
    }

    #[test]
    fn test_missing_category_writes_empty_manifest() {
        let temp = TempDir::new().unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Tiles).unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(report.warnings.len(), 1);
        let text = fs::read_to_string(output_dir.join("tiles.txt")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_subdirs_sorted_with_counts() {
        let temp = TempDir::new().unwrap();
        let characters = temp.path().join("graphic/characters");
        fs::create_dir_all(characters.join("npc")).unwrap();
        fs::create_dir_all(characters.join("hero")).unwrap();
        fs::write(characters.join("hero/1.bmp"), b"").unwrap();
        fs::write(characters.join("hero/0.bmp"), b"").unwrap();
        fs::write(characters.join("npc/idle.bmp"), b"").unwrap();
        // Loose files directly under the category are not scanned.
        fs::write(characters.join("stray.bmp"), b"").unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Characters).unwrap();

        let labels: Vec<_> = report.directories.iter().map(|d| d.dir.as_str()).collect();
        assert_eq!(labels, vec!["hero", "npc"]);
        assert_eq!(report.total(), 3);

        let text = fs::read_to_string(output_dir.join("characters.txt")).unwrap();
        assert_eq!(
            text,
            "graphic/characters/hero/0.bmp\n\
             graphic/characters/hero/1.bmp\n\
             graphic/characters/npc/idle.bmp\n"
        );
    }

    #[test]
    fn test_empty_subdir_recorded_with_zero_count() {
        let temp = TempDir::new().unwrap();
        let enemies = temp.path().join("graphic/enemies");
        fs::create_dir_all(enemies.join("ghost")).unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Enemies).unwrap();

        assert_eq!(report.directories.len(), 1);
        assert_eq!(report.directories[0].dir, "ghost");
        assert_eq!(report.directories[0].count, 0);
        let text = fs::read_to_string(output_dir.join("enemies.txt")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_objects_recursive() {
        let temp = TempDir::new().unwrap();
        let objects = temp.path().join("graphic/objects");
        fs::create_dir_all(objects.join("house/parts")).unwrap();
        fs::write(objects.join("house/base.bmp"), b"").unwrap();
        fs::write(objects.join("house/parts/door.bmp"), b"").unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Objects).unwrap();

        let labels: Vec<_> = report.directories.iter().map(|d| d.dir.as_str()).collect();
        assert_eq!(
            labels,
            vec!["graphic/objects/house", "graphic/objects/house/parts"]
        );
        let text = fs::read_to_string(output_dir.join("objects.txt")).unwrap();
        assert_eq!(
            text,
            "graphic/objects/house/base.bmp\ngraphic/objects/house/parts/door.bmp\n"
        );
    }

    #[test]
    fn test_objects_uppercase_extension_visited_but_unwritten() {
        // Discovery is case-insensitive, the flat scan writing entries is
        // not, so a directory holding only X.BMP shows up with count 0.
        let temp = TempDir::new().unwrap();
        let objects = temp.path().join("graphic/objects");
        fs::create_dir_all(objects.join("shouty")).unwrap();
        fs::write(objects.join("shouty/SIGN.BMP"), b"").unwrap();
        let output_dir = setup_output(temp.path());

        let report = generate_category(temp.path(), &output_dir, Category::Objects).unwrap();

        assert_eq!(report.directories.len(), 1);
        assert_eq!(report.directories[0].dir, "graphic/objects/shouty");
        assert_eq!(report.directories[0].count, 0);
        let text = fs::read_to_string(output_dir.join("objects.txt")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_generate_all_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-root");

        let err = generate_all(&missing).unwrap_err();

        assert!(matches!(err, Error::AssetRootNotFound { .. }));
        assert!(!missing.join(OUTPUT_DIR).exists());
    }

    #[test]
    fn test_generate_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let faces = temp.path().join("graphic/faces");
        fs::create_dir_all(&faces).unwrap();
        fs::write(faces.join("a.bmp"), b"").unwrap();

        generate_all(temp.path()).unwrap();
        let first = fs::read_to_string(temp.path().join(OUTPUT_DIR).join("faces.txt")).unwrap();

        generate_all(temp.path()).unwrap();
        let second = fs::read_to_string(temp.path().join(OUTPUT_DIR).join("faces.txt")).unwrap();

        assert_eq!(first, second);
    }
}
