//! Interactive loop.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use treewalk_core::OutputFormat;

use crate::render;
use crate::repl_commands::{handle_command, CommandResult};
use crate::session::Session;

const PROMPT: &str = "treewalk> ";

/// Mutable REPL settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplConfig {
    pub format: OutputFormat,
}

impl ReplConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Prints the current frame in the configured format.
pub fn show_frame(session: &Session, config: &ReplConfig) -> anyhow::Result<()> {
    let frame = session.frame();
    match config.format {
        OutputFormat::Text => println!("{}", render::frame_text(&frame)),
        OutputFormat::Json => println!("{}", render::to_json(&frame)?),
    }
    Ok(())
}

/// Runs the REPL until `quit` or end of input.
pub fn run(session: &mut Session, mut config: ReplConfig) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "{} {}",
        "treewalk".bold().cyan(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("Type 'help' for commands. Enter starts, then steps.\n");
    show_frame(session, &config)?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match handle_command(session, &line, &mut config) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(msg) => eprintln!("{} {msg}", "Error:".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
