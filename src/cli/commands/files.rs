use anyhow::{Context, Result};
use colored::Colorize;
use linemark::batch::pair_by_position;
use linemark::Linemark;
use std::fmt;
use std::path::Path;

/// One output line of a positional file comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Unchanged { number: usize, text: String },
    Removed { number: usize, text: String },
    Added { number: usize, text: String },
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffLine::Unchanged { number, text } => write!(f, "{}   {}", number, text),
            DiffLine::Removed { number, text } => write!(f, "{} - {}", number, text),
            DiffLine::Added { number, text } => write!(f, "{} + {}", number, text),
        }
    }
}

pub fn handle(project: &Path, old_file: &Path, new_file: &Path, all: bool) -> Result<()> {
    let linemark = Linemark::new(project)
        .context("Failed to load linemark configuration")?;

    let old_content = std::fs::read_to_string(old_file)
        .with_context(|| format!("Failed to read file: {}", old_file.display()))?;
    let new_content = std::fs::read_to_string(new_file)
        .with_context(|| format!("Failed to read file: {}", new_file.display()))?;

    println!(
        "{} {}",
        linemark.translate("differences", &[]).bright_blue().bold(),
        format!("({} → {})", old_file.display(), new_file.display()).bright_black()
    );

    for line in build_lines(&linemark, &old_content, &new_content, all) {
        match line {
            DiffLine::Unchanged { number, text } => println!("{:>5}   {}", number, text),
            DiffLine::Removed { number, text } => {
                println!("{:>5} {} {}", number, "-".bright_red(), text)
            }
            DiffLine::Added { number, text } => {
                println!("{:>5} {} {}", number, "+".bright_green(), text)
            }
        }
    }

    Ok(())
}

/// Pair lines by position and mark each changed pair. Unchanged pairs are
/// kept only when `all` is set; lines present on one side only are unmarked.
pub fn build_lines(linemark: &Linemark, old_content: &str, new_content: &str, all: bool) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old_content.lines().collect();
    let new_lines: Vec<&str> = new_content.lines().collect();
    let pairs = pair_by_position(&old_lines, &new_lines);

    let (changed_at, changed): (Vec<usize>, Vec<(&str, &str)>) = pairs
        .iter()
        .enumerate()
        .filter_map(|(idx, pair)| match pair {
            (Some(old), Some(new)) if old != new => Some((idx, (*old, *new))),
            _ => None,
        })
        .unzip();
    tracing::debug!(pairs = pairs.len(), changed = changed.len(), "comparing files");

    let mut marked: Vec<Option<(String, String)>> = vec![None; pairs.len()];
    for (idx, pair) in changed_at.into_iter().zip(linemark.highlight_all(&changed)) {
        marked[idx] = Some(pair);
    }

    let mut lines = Vec::new();
    for (idx, (pair, marked)) in pairs.into_iter().zip(marked).enumerate() {
        let number = idx + 1;
        match (pair, marked) {
            (_, Some((old, new))) => {
                lines.push(DiffLine::Removed { number, text: old });
                lines.push(DiffLine::Added { number, text: new });
            }
            ((Some(old), Some(_)), None) => {
                if all {
                    lines.push(DiffLine::Unchanged {
                        number,
                        text: old.to_string(),
                    });
                }
            }
            ((Some(old), None), None) => lines.push(DiffLine::Removed {
                number,
                text: old.to_string(),
            }),
            ((None, Some(new)), None) => lines.push(DiffLine::Added {
                number,
                text: new.to_string(),
            }),
            ((None, None), None) => {}
        }
    }

    lines
}
