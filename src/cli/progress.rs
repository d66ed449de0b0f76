//! CLI progress display utilities
//!
//! Step indicators and emoji constants for the generation run, with ASCII
//! fallbacks for terminals without emoji support.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

/// Magnifying glass - for scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/6] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print a warning line, indented under the current step.
pub fn print_warning(msg: &str) {
    println!("  {} {msg}", style("warning:").yellow().bold());
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
