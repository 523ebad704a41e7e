use std::io::{self, BufRead, Write};

use flowcalc::{Calculation, Presenter};
use log::info;

use crate::cli::{parse_command, OutputFormat, SessionCommand, SESSION_HELP};
use crate::report::{render_summary, JsonReport};
use crate::terminal::TerminalChart;

/// Write the result of an accepted calculation in the requested format.
pub fn emit(
    presenter: &Presenter<TerminalChart>,
    calculation: &Calculation,
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", render_summary(calculation))?;
            if let Some(plot) = presenter.chart() {
                writeln!(out)?;
                writeln!(out, "{}", plot.text())?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport::new(calculation, presenter.style());
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Run an interactive session until `quit` or end of input.
pub fn run_session(
    presenter: &mut Presenter<TerminalChart>,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "flowcalc interactive session; type `help` for commands")?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        match command {
            SessionCommand::Calculate { area, velocity } => {
                match presenter.calculate(&area, &velocity) {
                    Ok(calculation) => emit(presenter, &calculation, format, out)?,
                    Err(error) => writeln!(out, "notice: {}", error.notice())?,
                }
            }
            SessionCommand::Reset => {
                presenter.reset();
                writeln!(out, "cleared")?;
            }
            SessionCommand::Help => writeln!(out, "{SESSION_HELP}")?,
            SessionCommand::Quit => break,
        }
    }
    info!("session finished");
    Ok(())
}
