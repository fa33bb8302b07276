use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::args::{BenchArgs, DEFAULT_USER_AGENT};
use crate::error::{AppError, AppResult, ParseError, ValidationError};

use super::target;
use super::types::{BenchmarkPlan, HttpMethod, MAX_REQUESTS};

/// Turns raw flag values into a validated [`BenchmarkPlan`].
///
/// Resolution is pure: it reads nothing beyond `args` and performs no
/// network or file I/O. The steps run in a fixed order so every cross-field
/// rule sees the values it depends on: URL parse, host/port resolution,
/// method inference, the time-limit-overrides-count rule, pass-through
/// copies, and the final bounds check.
///
/// # Errors
/// - [`ParseError::InvalidUrl`] when the target URL does not parse; no
///   partial plan is produced.
/// - [`crate::error::ResolveError::InvalidPort`] (fatal) when the authority
///   carries an unparseable port.
/// - [`ValidationError::ConcurrencyExceedsRequests`] when `-c` exceeds the
///   resolved request count.
pub fn resolve(args: BenchArgs) -> AppResult<BenchmarkPlan> {
    let url = Url::parse(&args.url).map_err(|err| {
        AppError::parse(ParseError::InvalidUrl {
            url: args.url.clone(),
            source: err,
        })
    })?;
    let target = target::resolve_target(&url).map_err(AppError::resolve)?;

    let (method, body_file) = infer_method(args.post_file, args.put_file);
    let time_limit = (args.timelimit > 0).then_some(Duration::from_secs(args.timelimit));
    let requests = resolve_request_count(args.requests.map(u64::from), time_limit.is_some());
    let concurrency = args.concurrency.get();

    if concurrency > requests {
        return Err(AppError::validation(
            ValidationError::ConcurrencyExceedsRequests {
                concurrency,
                requests,
            },
        ));
    }

    Ok(BenchmarkPlan {
        requests,
        concurrency,
        time_limit,
        method,
        body_file,
        content_type: args.content_type,
        headers: args.headers.into_iter().collect(),
        cookies: args.cookies.into_iter().collect(),
        gzip: args.gzip,
        keep_alive: args.keep_alive,
        basic_auth: args.basic_auth,
        user_agent: DEFAULT_USER_AGENT.to_owned(),
        url: args.url,
        host: target.host,
        port: target.port,
        verbosity: args.verbosity,
        workers: args.workers.get(),
        continue_on_error: args.continue_on_error,
    })
}

/// `-p` wins over `-u` when both body files are given; the PUT file is then
/// ignored. Without either file the method is GET and no body is sent.
fn infer_method(
    post_file: Option<PathBuf>,
    put_file: Option<PathBuf>,
) -> (HttpMethod, Option<PathBuf>) {
    match (post_file, put_file) {
        (Some(path), _) => (HttpMethod::Post, Some(path)),
        (None, Some(path)) => (HttpMethod::Put, Some(path)),
        (None, None) => (HttpMethod::Get, None),
    }
}

/// An explicit `-n` always wins. Otherwise the count defaults to 1, unless a
/// time limit is active, in which case the sentinel makes the run time-bound.
const fn resolve_request_count(requests: Option<u64>, time_limited: bool) -> u64 {
    match requests {
        Some(count) => count,
        None if time_limited => MAX_REQUESTS,
        None => 1,
    }
}
