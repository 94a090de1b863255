use anyhow::{Context, Result};
use colored::Colorize;
use linemark::renderer::LineLevel;
use linemark::{Linemark, LineRenderer, MarkerPair};
use std::path::Path;

pub fn handle(project: &Path, old: &str, new: &str, markers: Option<MarkerPair>) -> Result<()> {
    let linemark = Linemark::new(project)
        .context("Failed to load linemark configuration")?;

    let (old_marked, new_marked) = match markers {
        Some(markers) => LineLevel::new(markers).render_pair(old, new),
        None => linemark.highlight(old, new),
    };

    print_pair(&linemark, &old_marked, &new_marked);
    Ok(())
}

pub fn print_pair(linemark: &Linemark, old: &str, new: &str) {
    let old_label = linemark.translate("old_version", &[]);
    let new_label = linemark.translate("new_version", &[]);

    println!("{} {}", format!("- {:<5}", old_label).bright_red(), old);
    println!("{} {}", format!("+ {:<5}", new_label).bright_green(), new);
}
