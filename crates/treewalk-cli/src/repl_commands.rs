//! REPL command handlers.
//!
//! Each command is a separate function; mutating commands print a notice
//! followed by the new frame.

use colored::Colorize;
use treewalk_core::{Algorithm, OutputFormat};

use crate::render;
use crate::repl::{show_frame, ReplConfig};
use crate::session::{Notice, Session};

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handles one input line. An empty line is bare Enter.
pub fn handle_command(session: &mut Session, line: &str, config: &mut ReplConfig) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        "" => apply(session, config, Session::enter),
        "start" | "s" => apply(session, config, Session::start),
        "next" | "n" | "step" | "space" => apply(session, config, Session::step),
        "reset" | "r" => apply(session, config, Session::reset),
        "algo" | "algorithm" => cmd_algo(session, config, &parts),
        "show" => redraw(session, config),
        "order" => cmd_order(session),
        "legend" => cmd_legend(session),
        "format" => cmd_format(config, &parts),
        "quit" | "exit" | "q" => CommandResult::Quit,
        "help" | "h" | "?" => {
            print_help();
            CommandResult::Continue
        }
        _ => CommandResult::Error(format!("Unknown command: {cmd} (type 'help')")),
    }
}

fn apply(
    session: &mut Session,
    config: &ReplConfig,
    action: fn(&mut Session) -> Notice,
) -> CommandResult {
    let notice = action(session);
    print_notice(notice);
    if notice.is_rejection() {
        return CommandResult::Continue;
    }
    redraw(session, config)
}

fn print_notice(notice: Notice) {
    match notice {
        Notice::Completed { .. } => println!("{}", notice.to_string().green().bold()),
        n if n.is_rejection() => println!("{}", n.to_string().yellow()),
        n => println!("{}", n.to_string().cyan()),
    }
}

fn redraw(session: &Session, config: &ReplConfig) -> CommandResult {
    match show_frame(session, config) {
        Ok(()) => CommandResult::Continue,
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_algo(session: &mut Session, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    let Some(arg) = parts.get(1) else {
        println!("Algorithm is {}", session.algorithm());
        return CommandResult::Continue;
    };
    match arg.parse::<Algorithm>() {
        Ok(algorithm) => {
            print_notice(session.select_algorithm(algorithm));
            redraw(session, config)
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_order(session: &Session) -> CommandResult {
    let engine = session.engine();
    if engine.visit_order().is_empty() {
        println!("No nodes processed yet.\n");
    } else {
        println!("{}", render::order_table(engine));
        println!("{}\n", render::order_line(engine.visit_order()));
    }
    CommandResult::Continue
}

fn cmd_legend(session: &Session) -> CommandResult {
    println!("{}", "Legend".bold());
    println!("{}\n", render::legend_text(session.algorithm()));
    CommandResult::Continue
}

fn cmd_format(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    let Some(arg) = parts.get(1) else {
        println!("Format is {}\n", config.format);
        return CommandResult::Continue;
    };
    match arg.parse::<OutputFormat>() {
        Ok(format) => {
            config.format = format;
            println!("Format: {format}\n");
            CommandResult::Continue
        }
        Err(_) => CommandResult::Error("Use: format text|json".to_string()),
    }
}

/// Print REPL help.
pub fn print_help() {
    println!("\n{}", "Treewalk Commands".bold().underline());
    println!();
    println!("  {}              Start if idle, otherwise step", "<Enter>".yellow());
    println!("  {}            Start the traversal", "start, s".yellow());
    println!("  {}             Process one node", "next, n".yellow());
    println!("  {}            Discard progress", "reset, r".yellow());
    println!("  {}       Switch algorithm (resets)", "algo bfs|dfs".yellow());
    println!("  {}                Redraw the current frame", "show".yellow());
    println!("  {}               Visit order so far", "order".yellow());
    println!("  {}              Node color legend", "legend".yellow());
    println!("  {}   Output format", "format text|json".yellow());
    println!("  {}             Show this help", "help, h".yellow());
    println!("  {}             Exit", "quit, q".yellow());
    println!();
}
