//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod best;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use best::{BestResult, find_best};
pub use solve::{Outcome, RoundStep, SolveConfig, SolveResult, solve_word};
