use std::error::Error as StdError;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use log::info;
use thiserror::Error;

use npreduce::dimacs::{self, DimacsError};
use npreduce::reductions::{
    coloring_to_sat, sat_to_three_sat, three_sat_to_coloring, ReductionError,
};

/// Reads one DIMACS instance from stdin and writes the reduced instance to stdout.
#[derive(Parser)]
#[command(name = "npreduce")]
#[command(version, about = "Polynomial-time reductions between DIMACS encodings", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Graph k-colouring (p edge) to SAT (p cnf)
    #[command(name = "color-to-sat")]
    ColorToSat {
        /// Number of colours
        #[arg(allow_negative_numbers = true)]
        colors: i64,
    },
    /// SAT (p cnf) to 3-SAT (p cnf)
    #[command(name = "sat-to-3sat")]
    SatToThreeSat,
    /// 3-SAT (p cnf) to graph 3-colouring (p edge)
    #[command(name = "3sat-to-color")]
    ThreeSatToColor,
}

#[derive(Error, Debug)]
enum Error {
    #[error("failed to parse input")]
    ParsingError(#[from] DimacsError),
    #[error("reduction failed")]
    ReductionError(#[from] ReductionError),
    #[error("failed to write output")]
    OutputError(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(&cli.command, io::stdin().lock()) {
        Err(err) => {
            eprintln!("{}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("execution failed");
            process::exit(1);
        }
        Ok(output) => {
            if let Err(err) = io::stdout().lock().write_all(&output) {
                eprintln!("{}", Error::from(err));
                process::exit(1);
            }
        }
    }
}

/// Runs one reduction to completion. The output is buffered so that a failure part way through
/// never leaves a partial instance on stdout.
fn run<R: Read>(command: &Command, input: R) -> Result<Vec<u8>, Error> {
    let mut output = vec![];
    match *command {
        Command::ColorToSat { colors } => {
            let graph = dimacs::graph::read(input)?;
            info!("reducing {}-colouring to SAT", colors);
            let cnf = coloring_to_sat::reduce(&graph, colors)?;
            dimacs::cnf::write(&mut output, &cnf)?;
        }
        Command::SatToThreeSat => {
            let cnf = dimacs::cnf::read(input)?;
            info!("reducing SAT to 3-SAT");
            let three_sat = sat_to_three_sat::reduce(&cnf)?;
            dimacs::cnf::write(&mut output, &three_sat)?;
        }
        Command::ThreeSatToColor => {
            let cnf = dimacs::cnf::read(input)?;
            info!("reducing 3-SAT to 3-colouring");
            let gadget = three_sat_to_coloring::reduce(&cnf)?;
            dimacs::graph::write(&mut output, &gadget.graph)?;
        }
    }
    Ok(output)
}
