//! Benchmark-plan resolution: the validated execution plan and the rules
//! that build it from raw CLI values.
mod resolve;
mod target;
mod types;


pub use resolve::resolve;
pub use target::{Target, resolve_target};
pub use types::{BenchmarkPlan, HttpMethod, MAX_REQUESTS};
