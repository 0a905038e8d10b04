//! Treewalk CLI - step through BFS and DFS on a tree in the terminal.

mod render;
mod repl;
mod repl_commands;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use treewalk_core::{
    Algorithm, OutputFormat, Tree, TreeCatalog, TreeSpec, TreewalkConfig,
};

use crate::render::OrderReport;
use crate::repl::ReplConfig;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "treewalk")]
#[command(author, version, about = "Step through BFS and DFS on a tree", long_about = None)]
struct Cli {
    /// Config file (defaults to ./treewalk.toml when present)
    #[arg(short, long, global = true, env = "TREEWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Traversal algorithm (bfs or dfs)
    #[arg(short, long, global = true)]
    algorithm: Option<Algorithm>,

    /// Output format (text or json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// TOML or JSON tree spec replacing the selected algorithm's tree
    #[arg(short, long, global = true)]
    tree: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive stepping session (default)
    Run,

    /// Run a traversal to completion and print the visit order
    Order,

    /// Print the frame after a number of steps
    Frame {
        /// Steps to perform after start
        #[arg(short, long, default_value = "0")]
        steps: usize,
    },
}

/// `RUST_LOG` wins; otherwise the configured level, or `warn` if that does
/// not parse.
fn init_tracing(default_level: &str) {
    let mut fell_back = false;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| {
            fell_back = true;
            EnvFilter::new("warn")
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    if fell_back {
        tracing::warn!(level = %default_level, "invalid log level in configuration, using warn");
    }
}

fn load_config(cli: &Cli) -> Result<TreewalkConfig> {
    let config = match &cli.config {
        Some(path) => TreewalkConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TreewalkConfig::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

fn build_catalog(
    config: &TreewalkConfig,
    algorithm: Algorithm,
    tree: Option<&PathBuf>,
) -> Result<TreeCatalog> {
    let catalog = config.catalog().context("Invalid tree in configuration")?;
    let Some(path) = tree else {
        return Ok(catalog);
    };
    let spec = TreeSpec::from_path(path)
        .with_context(|| format!("Failed to read tree spec {}", path.display()))?;
    let tree = Tree::from_spec(&spec)
        .with_context(|| format!("Invalid tree spec {}", path.display()))?;
    tracing::debug!(%algorithm, nodes = tree.len(), "tree override loaded");
    Ok(catalog.with_variant(algorithm, tree))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging.level);

    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    let algorithm = cli.algorithm.unwrap_or(config.algorithm);
    let format = cli.format.unwrap_or(config.display.format);
    let catalog = build_catalog(&config, algorithm, cli.tree.as_ref())?;
    let mut session = Session::new(catalog, algorithm, config.display.scale);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => repl::run(&mut session, ReplConfig::new(format))?,
        Commands::Order => {
            let order = session.run_to_completion();
            match format {
                OutputFormat::Text => {
                    println!("{}", render::order_table(session.engine()));
                    println!("{}", render::order_line(&order));
                }
                OutputFormat::Json => {
                    let report = OrderReport::new(algorithm, order);
                    println!("{}", render::to_json(&report)?);
                }
            }
        }
        Commands::Frame { steps } => {
            if let Some(notice) = session.advance(steps) {
                if format == OutputFormat::Text {
                    println!("{notice}\n");
                }
            }
            repl::show_frame(&session, &ReplConfig::new(format))?;
        }
    }

    Ok(())
}
