//! check-graphite
//!
//! Prints one Nagios status line and exits with the matching code.

use std::process;

use anyhow::{Context, Result};
use check_graphite::cli::Args;
use check_graphite::status::{CheckOutcome, Status};
use check_graphite::{run_check, ThresholdCheck};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use graphite_guard::client::GraphiteClient;
use graphite_guard::error::GuardError;
use graphite_guard::logging::{init_logging, LoggingConfig};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let rendered = e.to_string();
            let reason = rendered.lines().next().unwrap_or_default();
            usage_failure(reason.trim_start_matches("error: "))
        }
    };

    if let Err(e) = init_logging(LoggingConfig::from_verbosity(args.verbose)) {
        eprintln!("logging disabled: {e}");
    }

    let thresholds = match args.validate() {
        Ok(thresholds) => thresholds,
        Err(e) => usage_failure(&e.to_string()),
    };

    let outcome = execute(&args, &thresholds);
    println!("{outcome}");
    process::exit(outcome.exit_code());
}

fn execute(args: &Args, thresholds: &ThresholdCheck) -> CheckOutcome {
    let runtime = match build_runtime() {
        Ok(runtime) => runtime,
        Err(e) => return startup_failure(e),
    };

    match GraphiteClient::new(args.client_config()) {
        Ok(client) => runtime.block_on(run_check(&client, args, thresholds)),
        Err(e) => CheckOutcome::unknown(GuardError::from(e).to_string()),
    }
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn startup_failure(err: anyhow::Error) -> CheckOutcome {
    CheckOutcome::unknown(format!("{err:#}"))
}

fn usage_failure(reason: &str) -> ! {
    println!("execution failed: {}", reason.trim());
    println!("{}", Args::command().render_help());
    process::exit(Status::Unknown.exit_code());
}
