pub mod commands;

use clap::{Parser, Subcommand};
use linemark::MarkerPair;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linemark")]
#[command(about = "Highlight what changed inside corresponding lines", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short = 'C', long, global = true, default_value = ".", help = "Project root holding .linemark/")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default configuration for the project")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Mark the changed part of an old/new line pair")]
    Line {
        #[arg(help = "Old line")]
        old: String,
        #[arg(help = "New line")]
        new: String,
        #[arg(short, long, help = "Marker pair as OPEN,CLOSE (overrides config)")]
        markers: Option<MarkerPair>,
    },

    #[command(about = "Show the common prefix/suffix extent of two lines")]
    Extent {
        #[arg(help = "Old line")]
        old: String,
        #[arg(help = "New line")]
        new: String,
    },

    #[command(about = "Compare two files line by line and mark changed lines")]
    Files {
        #[arg(help = "Old file")]
        old: PathBuf,
        #[arg(help = "New file")]
        new: PathBuf,
        #[arg(short, long, help = "Also print unchanged lines")]
        all: bool,
    },

    #[command(about = "Render a translated message")]
    Translate {
        #[arg(help = "Message key")]
        key: String,
        #[arg(short, long, help = "Language name (overrides config)")]
        lang: Option<String>,
        #[arg(short, long = "placeholder", value_name = "NAME=VALUE", help = "Placeholder value")]
        placeholders: Vec<String>,
    },

    #[command(about = "Configure linemark settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        key: String,
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}
