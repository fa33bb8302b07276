mod app;
mod parse;
mod resolve;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use parse::ParseError;
pub use resolve::ResolveError;
pub use validation::ValidationError;
