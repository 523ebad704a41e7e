use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How a calculation is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary followed by a terminal plot
    #[default]
    Text,
    /// Machine-readable result including the chart description
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "flowcalc")]
#[command(author, version, about = "Channel discharge calculator (Q = A·v)")]
#[command(long_about = "Computes the discharge of a channel section, classifies it as low, \
    operative or high and plots it against the theoretical Q = A·v line.\n\n\
    Without --area/--velocity an interactive session is started.\n\n\
    Exit codes:\n  \
    0 - Calculation shown\n  \
    1 - Configuration or runtime error\n  \
    2 - Invalid input")]
pub struct Cli {
    /// Cross-sectional area of the channel in m²
    #[arg(long, requires = "velocity", allow_hyphen_values = true)]
    pub area: Option<String>,

    /// Mean flow velocity in m/s
    #[arg(long, requires = "area", allow_hyphen_values = true)]
    pub velocity: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./flowcalc.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One line typed during an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Calculate from raw area and velocity text.
    Calculate { area: String, velocity: String },
    /// Clear the result and the chart.
    Reset,
    /// Show the available commands.
    Help,
    /// Leave the session.
    Quit,
}

pub const SESSION_HELP: &str = "commands:\n  \
    calc <area> <velocity>   compute discharge (alias: c)\n  \
    reset                    clear the result and chart (alias: r)\n  \
    help                     show this help (alias: h, ?)\n  \
    quit                     leave the session (alias: q, exit)";

/// Parse a session line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();
    let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("calc" | "c", [area, velocity]) => SessionCommand::Calculate {
            area: (*area).to_owned(),
            velocity: (*velocity).to_owned(),
        },
        ("calc" | "c", _) => return Err("usage: calc <area> <velocity>".to_owned()),
        ("reset" | "r", []) => SessionCommand::Reset,
        ("help" | "h" | "?", []) => SessionCommand::Help,
        ("quit" | "q" | "exit", []) => SessionCommand::Quit,
        _ => return Err(format!("unknown command `{}`; type `help`", line.trim())),
    };
    Ok(Some(command))
}
