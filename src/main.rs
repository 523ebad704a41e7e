mod cli;
mod report;
mod session;
mod terminal;

use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use flowcalc::{Config, Presenter};
use log::LevelFilter;

use cli::Cli;
use session::{emit, run_session};
use terminal::TerminalChart;

/// Exit status used when the calculation was refused.
const INVALID_INPUT_EXIT: u8 = 2;

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Settings only affect presentation; the calculation is the same without them.
    let config = Config::discover(cli.config.as_deref(), &env::current_dir()?)?;
    let backend = TerminalChart::new(config.terminal);
    let mut presenter = Presenter::new(backend, config.chart);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let (Some(area), Some(velocity)) = (&cli.area, &cli.velocity) {
        return match presenter.calculate(area, velocity) {
            Ok(calculation) => {
                emit(&presenter, &calculation, cli.format, &mut out)?;
                out.flush()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                eprintln!("{}", error.notice());
                Ok(ExitCode::from(INVALID_INPUT_EXIT))
            }
        };
    }

    run_session(&mut presenter, cli.format, io::stdin().lock(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}
