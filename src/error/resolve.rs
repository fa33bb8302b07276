use thiserror::Error;

/// Host/port resolution failures. Unlike the parse and validation domains
/// these are fatal: without a usable port there is no benchmark target, so
/// the hosting process terminates instead of retrying.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid port in authority '{authority}': {source}")]
    InvalidPort {
        authority: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
