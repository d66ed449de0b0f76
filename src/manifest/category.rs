//! Asset categories

use std::fmt;
use std::path::PathBuf;

/// How a category's bitmaps are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One level of sprite subdirectories, each scanned flat.
    Subdirs,
    /// Bitmaps live directly in the category directory.
    Flat,
    /// Arbitrarily nested tree; every bitmap-bearing directory is scanned.
    Recursive,
}

/// One of the six fixed resource categories.
///
/// Each category maps to a directory under `graphic/` and a manifest file
/// under `data/resource_lists/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Characters,
    Enemies,
    Objects,
    Faces,
    Tiles,
    Particles,
}

impl Category {
    /// All categories, in generation order.
    pub const ALL: [Category; 6] = [
        Category::Characters,
        Category::Enemies,
        Category::Objects,
        Category::Faces,
        Category::Tiles,
        Category::Particles,
    ];

    /// Category name as used in directory and manifest file naming.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Enemies => "enemies",
            Category::Objects => "objects",
            Category::Faces => "faces",
            Category::Tiles => "tiles",
            Category::Particles => "particles",
        }
    }

    /// File name of the generated manifest, e.g. `characters.txt`.
    #[must_use]
    pub fn manifest_name(self) -> &'static str {
        match self {
            Category::Characters => "characters.txt",
            Category::Enemies => "enemies.txt",
            Category::Objects => "objects.txt",
            Category::Faces => "faces.txt",
            Category::Tiles => "tiles.txt",
            Category::Particles => "particles.txt",
        }
    }

    /// Directory under the asset root holding this category's bitmaps.
    #[must_use]
    pub fn graphic_dir(self) -> PathBuf {
        PathBuf::from("graphic").join(self.name())
    }

    /// On-disk layout of this category.
    #[must_use]
    pub fn layout(self) -> Layout {
        match self {
            Category::Faces => Layout::Flat,
            Category::Objects => Layout::Recursive,
            _ => Layout::Subdirs,
        }
    }

    /// The category whose `graphic/` directory occurs in `path`, if any.
    ///
    /// This is how the engine routes a resource request to a list file: by
    /// substring, so both absolute and asset-relative paths resolve.
    #[must_use]
    pub fn for_path(path: &str) -> Option<Category> {
        let normalized = path.replace('\\', "/");
        Category::ALL
            .into_iter()
            .find(|category| normalized.contains(&format!("graphic/{}", category.name())))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
