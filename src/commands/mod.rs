//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod crack;
pub mod transform;

pub use analyze::{AnalysisResult, analyze_text};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, Trial, run_benchmark};
pub use crack::{CrackConfig, CrackOutcome, run_crack};
pub use transform::{Mode, TransformResult, run_transform};
