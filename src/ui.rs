//! Terminal output for the release workflow.
//!
//! `console` drops the styling when the stream is not a terminal.

use console::style;

use crate::release::ReleaseOutcome;
use crate::warning::ReleaseWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal release warning.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display what a finished release produced.
pub fn display_release_summary(outcome: &ReleaseOutcome) {
    println!("\n{}", style(format!("Released {}", outcome.version)).bold());
    println!("  Tag:           {}", style(&outcome.tag).green());
    println!("  Commit:        {}", short_hash(&outcome.commit.to_string()));
    println!("  Release notes: {}", outcome.notes_path.display());
    println!(
        "\n{} To publish the release, run:\n  {}",
        style("→").yellow(),
        style(format!("git push origin HEAD {}", outcome.tag)).cyan()
    );
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > 7 {
        &hash[..7]
    } else {
        hash
    }
}
