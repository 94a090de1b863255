mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let project = cli.project;
    match cli.command {
        Commands::Init { path } => commands::init::handle(&path),
        Commands::Line { old, new, markers } => commands::line::handle(&project, &old, &new, markers),
        Commands::Extent { old, new } => commands::extent::handle(&old, &new),
        Commands::Files { old, new, all } => commands::files::handle(&project, &old, &new, all),
        Commands::Translate { key, lang, placeholders } => {
            commands::translate::handle(&project, &key, lang.as_deref(), &placeholders)
        }
        Commands::Config { action } => commands::config::handle(&project, action),
    }
}
