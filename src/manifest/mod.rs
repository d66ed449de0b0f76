//! Resource manifest generation and reading
//!
//! A manifest is one plain-text file per asset category under
//! `data/resource_lists/`, holding one asset-relative bitmap path per line.
//! The engine reads these instead of scanning directories at runtime.

pub mod category;
pub mod generator;
pub mod reader;

pub use category::{Category, Layout};
pub use generator::{
    CategoryReport, DirCount, GenerationSummary, OUTPUT_DIR, generate_all, generate_category,
};
pub use reader::{find_first_in_dir, read_manifest};
