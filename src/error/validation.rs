use thiserror::Error;

/// Cross-field plan violations. Each variant names the rule that failed so
/// callers can tell the violations apart.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Cannot use concurrency level greater than total number of requests ({concurrency} > {requests})."
    )]
    ConcurrencyExceedsRequests { concurrency: u64, requests: u64 },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
