//! fiendres CLI - resource list generation for Fiend asset trees

pub mod progress;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use crate::manifest::{self, Category};
use progress::{DISK, LOOKING_GLASS};

#[derive(Parser)]
#[command(name = "fiendres")]
#[command(about = "Generate bitmap resource lists for Fiend game assets", long_about = None)]
struct Cli {
    /// Asset root directory (defaults to ../release relative to the executable)
    asset_root: Option<PathBuf>,
}

/// Run the fiendres CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let started = Instant::now();

    let asset_root = match cli.asset_root {
        Some(path) => path,
        None => default_asset_root()?,
    };

    if !asset_root.is_dir() {
        anyhow::bail!("asset root not found: {}", asset_root.display());
    }

    let output_dir = asset_root.join(manifest::OUTPUT_DIR);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    println!("Scanning resources in: {}", asset_root.display());
    println!("Output directory: {}", output_dir.display());

    let total = Category::ALL.len();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        progress::print_step(
            i + 1,
            total,
            LOOKING_GLASS,
            &format!("Generating {}...", category.manifest_name()),
        );

        let report = manifest::generate_category(&asset_root, &output_dir, category)?;

        for warning in &report.warnings {
            progress::print_warning(warning);
        }
        for dir in &report.directories {
            println!("  {}: {} files", dir.dir, dir.count);
        }
    }

    println!(
        "{}All resource lists written to {}",
        DISK,
        output_dir.display()
    );
    progress::print_done(started.elapsed());

    Ok(())
}

/// Default asset root: the `release` directory next to the directory the
/// executable lives in.
fn default_asset_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("resolving executable path")?;
    let tool_dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(tool_dir.parent().unwrap_or(tool_dir).join("release"))
}
