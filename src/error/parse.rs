use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid numeric value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
}
