use anyhow::Result;
use colored::Colorize;
use linemark::{compute_extent, Extent, MbString};

pub fn handle(old: &str, new: &str) -> Result<()> {
    let old = MbString::from(old);
    let new = MbString::from(new);
    let extent = compute_extent(&old, &new);
    let (start, end) = extent.region();

    match extent {
        Extent::Identical => {
            println!("{} Lines are identical", "✓".bright_green());
        }
        Extent::Changed(changed) => {
            println!("{}", "Changed extent:".bright_blue().bold());
            println!("  {} {}", "common prefix:".bright_cyan(), changed.prefix());
            println!("  {} {}", "common suffix:".bright_cyan(), changed.suffix());
            println!("  {} {}", "old span:".bright_cyan(), changed.span_len(old.as_chars().len()));
            println!("  {} {}", "new span:".bright_cyan(), changed.span_len(new.as_chars().len()));
        }
    }
    println!("  {} ({}, {})", "region:".bright_black(), start, end);

    Ok(())
}
