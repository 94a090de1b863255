use anyhow::{Context, Result};
use colored::Colorize;
use linemark::Linemark;
use std::path::Path;

pub fn handle(path: &Path) -> Result<()> {
    println!("{}", "Initializing linemark in your project...".bright_blue().bold());

    let linemark = Linemark::init(path)
        .context("Failed to initialize linemark in the specified directory")?;
    println!("  {} Created {}", "✓".bright_green(), linemark.config().path.display());

    let markers = linemark.config().data.renderer.markers();
    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  {}", "linemark line \"cat\" \"cut\"".bright_yellow());
    println!(
        "  {} {}",
        "→".bright_black(),
        format!("c{}a{}t / c{}u{}t", markers.open, markers.close, markers.open, markers.close)
    );

    Ok(())
}
