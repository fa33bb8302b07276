use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::args::OptionSet;

/// Request budget substituted when a positive time limit is given and `-n`
/// was left untouched; the run is then bounded by time, not count.
pub const MAX_REQUESTS: u64 = 2_147_483_647;

/// The verb is inferred from which body-file flag was supplied, never chosen
/// directly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved description of one benchmark run.
///
/// Built exactly once per invocation by [`resolve`](super::resolve) and
/// read-only afterwards; every field is owned, so the plan can be handed to
/// concurrent request workers without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPlan {
    pub requests: u64,
    pub concurrency: u64,
    /// `None` means the run is bounded by `requests` alone. Enforcement of a
    /// set limit belongs to the dispatch loop.
    pub time_limit: Option<Duration>,
    pub method: HttpMethod,
    /// Set iff `method` is POST or PUT. Existence is checked by whoever
    /// reads the body, not during resolution.
    pub body_file: Option<PathBuf>,
    pub content_type: String,
    /// Raw header lines, appended after the standard headers in order.
    pub headers: OptionSet,
    pub cookies: OptionSet,
    pub gzip: bool,
    pub keep_alive: bool,
    /// `user:password` pair, passed through unchanged.
    pub basic_auth: Option<String>,
    pub user_agent: String,
    /// Target URL exactly as supplied on the command line.
    pub url: String,
    pub host: String,
    /// 0 when the scheme defines no default port; intentional passthrough.
    pub port: u16,
    pub verbosity: u8,
    pub workers: usize,
    pub continue_on_error: bool,
}
