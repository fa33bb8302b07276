//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::BenchArgs;
pub use types::{OptionSet, PositiveU64, PositiveUsize};

pub(crate) use defaults::DEFAULT_USER_AGENT;
