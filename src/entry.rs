//! Binary entry: parse flags, resolve the plan, report it.

use clap::Parser;
use clap::error::ErrorKind;

use crate::args::BenchArgs;
use crate::error::{AppError, AppResult};
use crate::plan::{self, BenchmarkPlan};
use crate::timing::StopWatch;

/// Parses the process arguments and resolves the benchmark plan. The
/// dispatch engine picks the plan up from here; `-h`/`--version` short-
/// circuit with an informational exit and no plan.
///
/// # Errors
/// Any resolution failure from [`plan::resolve`]; CLI usage errors surface
/// as [`AppError::Clap`] so `main` can map every failure to an exit code.
pub fn run() -> AppResult<()> {
    let args = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbosity > 0);

    let mut watch = StopWatch::new();
    watch.start();
    let plan = plan::resolve(args)?;
    watch.stop();
    tracing::debug!(elapsed = ?watch.elapsed(), "configuration resolved");

    report(&plan);
    Ok(())
}

fn parse_args() -> AppResult<Option<BenchArgs>> {
    match BenchArgs::try_parse() {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(AppError::from(err)),
    }
}

fn report(plan: &BenchmarkPlan) {
    tracing::info!(
        url = %plan.url,
        host = %plan.host,
        port = plan.port,
        method = %plan.method,
        requests = plan.requests,
        concurrency = plan.concurrency,
        time_limit = ?plan.time_limit,
        workers = plan.workers,
        keep_alive = plan.keep_alive,
        gzip = plan.gzip,
        "benchmark plan ready"
    );
    if !plan.headers.is_empty() {
        tracing::debug!(headers = %plan.headers, "extra header lines");
    }
    if !plan.cookies.is_empty() {
        tracing::debug!(cookies = %plan.cookies, "cookies");
    }
}
