//! Configuration-resolution core for the `pummel` HTTP benchmarker.
//!
//! This crate turns ab-style command-line flags and a target URL into a
//! validated, immutable [`plan::BenchmarkPlan`], and carries the two small
//! utilities the benchmark run leans on: [`timing::StopWatch`] for elapsed
//! time and [`trace::FailureTracer`] for diagnostic failure reporting. The
//! dispatch loop, statistics aggregation, and report formatting live
//! outside this crate and consume what it produces.
pub mod args;
pub mod entry;
pub mod error;
pub mod logger;
pub mod plan;
pub mod timing;
pub mod trace;
