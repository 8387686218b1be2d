use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinmap::commands;
use pinmap::error_fmt::AppError;

#[derive(Parser)]
#[command(name = "pinmap", version)]
#[command(about = "Print a colorized pinout map of a board header")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by the rendering commands
#[derive(Args, Clone)]
struct RenderArgs {
    /// YAML layout file (defaults to the built-in Raspberry Pi header)
    #[arg(long, short)]
    layout: Option<PathBuf>,
    /// Disable ANSI colors
    #[arg(long)]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full pinout: legend, header and pin rows (default)
    Show {
        #[command(flatten)]
        render: RenderArgs,
        /// Omit the legend block
        #[arg(long)]
        no_legend: bool,
    },
    /// Print only the symbol legend
    Legend {
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Validate a layout file
    Check {
        /// Layout file to validate
        path: PathBuf,
    },
    /// Print the built-in layout as YAML, as a starting point for custom layouts
    Dump,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pinmap=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        None => commands::show(&mut out, None, true, true),
        Some(Commands::Show { render, no_legend }) => commands::show(
            &mut out,
            render.layout.as_deref(),
            !render.plain,
            !no_legend,
        ),
        Some(Commands::Legend { render }) => {
            commands::legend(&mut out, render.layout.as_deref(), !render.plain)
        }
        Some(Commands::Check { path }) => commands::check(&mut out, &path),
        Some(Commands::Dump) => commands::dump(&mut out),
    }
}
