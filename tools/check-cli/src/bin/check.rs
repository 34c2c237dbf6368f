use check_cli::timing::{self, RunTiming, Stopwatch};
use check_cli::{check_plan, logging, reporter, Cli, RealCommandRunner, Run};
use clap::Parser;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let options = cli.options();
    let plan = check_plan(&options);
    let mut stdout = std::io::stdout();

    if cli.list {
        reporter::print_plan(&mut stdout, &plan);
        process::exit(0);
    }

    let interrupt = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupt);
    if let Err(error) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(%error, "could not install interrupt handler");
    }

    let runner = RealCommandRunner::new(interrupt);
    let stopwatch = Stopwatch::start();
    let planned = plan.len();

    let (exit_code, checks_run, failed_check) = match Run::new(plan).execute(&runner, &mut stdout) {
        Ok(report) => (0, report.checks_run, None),
        Err(error) => {
            tracing::debug!(%error, "run stopped");
            (error.exit_code(), error.checks_run(), Some(error.label().to_string()))
        }
    };
    tracing::debug!(exit_code, checks_run, planned, "run complete");

    if let Some(path) = cli.timing_file.as_deref() {
        timing::append_timing(
            path,
            &RunTiming {
                timestamp: timing::utc_now_rfc3339(),
                target: options.target.display().to_string(),
                checks_run,
                exit_code,
                failed_check,
                elapsed_ms: stopwatch.elapsed_millis(),
            },
        );
    }

    process::exit(exit_code);
}
