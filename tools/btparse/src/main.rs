//! btparse - turns a captured baretest report stream into a host-side
//! summary and optionally a JUnit XML file.
//!
//! The firmware writes its report over a serial line; capture that stream
//! (e.g. `qemu ... -serial file:run.log`, or a terminal logger) and feed the
//! file or stdin to this tool.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

mod junit;
mod parse;

#[macro_use]
extern crate log;

use parse::{ParseError, Report};

/// Parse a captured baretest report stream.
#[derive(Parser)]
#[command(name = "btparse", version, about)]
struct Args {
    /// Report capture to read; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write a JUnit XML report to this file.
    #[arg(long)]
    junit_xml: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    match try_main(&args) {
        Ok(0) => {}
        Ok(failures) => {
            error!("{} failed test(s)", failures);
            exit(1);
        }
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    }
}

fn try_main(args: &Args) -> Result<u32, ParseError> {
    let report = match &args.input {
        Some(path) => Report::from_reader(BufReader::new(File::open(path)?))?,
        None => Report::from_reader(io::stdin().lock())?,
    };

    report.print_summary();

    if let Some(path) = &args.junit_xml {
        junit::write_junit(path, &report)?;
        info!("JUnit XML report written to {}", path.display());
    }

    Ok(report.total_failed())
}
