pub mod handlers;
pub mod pipeline;

pub use pipeline::{AnalysisError, AnalysisReport, Analyzer, Document};
