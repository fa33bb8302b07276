use std::path::PathBuf;

use clap::Parser;

use super::defaults::default_workers;
use super::parsers::{parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

/// ab-style flag surface. Only raw values live here; every cross-field rule
/// (method inference, time-limit override, concurrency bounds) belongs to
/// the plan resolver.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "ab-style HTTP benchmarking tool - resolves flags and a target URL into a validated benchmark plan."
)]
pub struct BenchArgs {
    /// Number of requests to perform
    #[arg(short = 'n', long = "requests", value_parser = parse_positive_u64)]
    pub requests: Option<PositiveU64>,

    /// Number of multiple requests to make at a time
    #[arg(
        short = 'c',
        long = "concurrency",
        default_value = "1",
        value_parser = parse_positive_u64
    )]
    pub concurrency: PositiveU64,

    /// Seconds to max. spend benchmarking (0 = no time limit)
    #[arg(short = 't', long = "timelimit", default_value = "0")]
    pub timelimit: u64,

    /// File containing data to POST. Remember also to set -T
    #[arg(short = 'p', long = "post-file")]
    pub post_file: Option<PathBuf>,

    /// File containing data to PUT. Remember also to set -T
    #[arg(short = 'u', long = "put-file")]
    pub put_file: Option<PathBuf>,

    /// Content-type header to use for POST/PUT data, eg. 'application/x-www-form-urlencoded'
    #[arg(short = 'T', long = "content-type", default_value = "text/plain")]
    pub content_type: String,

    /// Arbitrary header line, eg. 'Accept-Encoding: gzip'. Inserted after all normal header lines. (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Cookie, eg. 'Apache=1234'. (repeatable)
    #[arg(short = 'C', long = "cookie")]
    pub cookies: Vec<String>,

    /// Basic WWW authentication, colon separated username and password
    #[arg(short = 'A', long = "auth")]
    pub basic_auth: Option<String>,

    /// Use HTTP KeepAlive feature
    #[arg(short = 'k', long = "keep-alive")]
    pub keep_alive: bool,

    /// Use HTTP Gzip feature
    #[arg(short = 'z', long = "gzip")]
    pub gzip: bool,

    /// How much troubleshooting info to print
    #[arg(short = 'v', long = "verbosity", default_value = "0")]
    pub verbosity: u8,

    /// Number of worker threads driving requests
    #[arg(
        short = 'G',
        long = "workers",
        default_value_t = default_workers(),
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Don't exit on socket receive errors
    #[arg(short = 'r', long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Target URL, [http|https]://hostname[:port]/path
    pub url: String,
}
