//! # fiendres
//!
//! Resource list generation for the Fiend game's bitmap assets.
//!
//! The game engine loads sprites by reading plain-text resource lists
//! instead of scanning directories at runtime, which sidesteps
//! platform-specific directory-listing quirks. This crate walks an asset
//! root, finds every `.bmp` under the six `graphic/` categories, and writes
//! one manifest file per category under `data/resource_lists/`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fiendres::manifest;
//!
//! // Regenerate every category manifest under assets/data/resource_lists/
//! let summary = manifest::generate_all("assets".as_ref())?;
//! for report in &summary.reports {
//!     println!("{}: {} entries", report.category, report.total());
//! }
//! # Ok::<(), fiendres::Error>(())
//! ```
//!
//! Reading a generated list back, the way the engine does:
//!
//! ```no_run
//! use fiendres::manifest::reader;
//!
//! let entries = reader::read_manifest("assets/data/resource_lists/tiles.txt".as_ref())?;
//! if let Some(first) = reader::find_first_in_dir(&entries, "graphic/tiles/grass") {
//!     println!("first grass tile: {first}");
//! }
//! # Ok::<(), fiendres::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `fiendres` command-line binary

pub mod error;
pub mod manifest;
pub mod scan;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::manifest::{
        Category, CategoryReport, DirCount, GenerationSummary, Layout, generate_all,
        generate_category,
    };
    pub use crate::scan::{find_bitmap_dirs, scan_bmp_dir};
    pub use crate::utils::path::{normalize_path, to_relative};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
