pub mod config;
pub mod extent;
pub mod files;
pub mod init;
pub mod line;
pub mod translate;

use colored::Colorize;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let error_str = err.to_string();
    if error_str.contains("Failed to load language") {
        eprintln!("  {} Check language.name and language.directory in .linemark/config.toml", "└".bright_cyan());
    } else if error_str.contains("Unknown config key") {
        eprintln!("  {} Run {} to see valid keys", "└".bright_cyan(), "linemark config list".bright_cyan());
    } else if error_str.contains("No such file") {
        eprintln!("  {} Check that the file path is correct", "└".bright_cyan());
    } else {
        eprintln!("  {} Set {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        );
    }
}
