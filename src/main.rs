//! Command-line front end.
//!
//! ```text
//! u-cpusched <sim_time> <algorithm> [time_slice] < processes.txt
//! ```
//!
//! Processes are read from stdin as `id arrival burst` triplets. The trace
//! and the statistics block go to stderr; `--json` also prints the report on
//! stdout. Any argument or input error exits with status 1.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use u_cpusched::config::SimulationConfig;
use u_cpusched::models::ProcessSet;
use u_cpusched::scheduler::WriterTrace;
use u_cpusched::validation::validate_processes;
use u_cpusched::SimError;

const BANNER: &str = "======================================";
const USAGE: &str = "usage: u-cpusched sim_time algorithm [time_slice]";

#[derive(Debug, Parser)]
#[command(version, about = "Discrete-time CPU scheduling simulator")]
struct Cli {
    /// Simulation horizon in ticks (>= 1)
    #[arg(allow_negative_numbers = true)]
    sim_time: i64,

    /// Scheduling algorithm: FCFS, SJF or RR
    algorithm: String,

    /// Round-Robin time slice (required for RR)
    #[arg(allow_negative_numbers = true)]
    time_slice: Option<i64>,

    /// Also print the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            sim_time: self.sim_time,
            algorithm: self.algorithm.clone(),
            time_slice: self.time_slice,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::debug!("argument error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let sim = cli.config().validate()?;

    let processes = ProcessSet::read_from(io::stdin().lock())?;
    validate_processes(&processes)?;

    let mut trace = WriterTrace::new(io::stderr().lock());
    trace.line(BANNER);
    let report = sim.run(&processes, &mut trace);
    trace.line(BANNER);
    trace.line(&report);

    if cli.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    }

    Ok(())
}
