//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod pipeline;
mod search;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use search::SearchAnalyzer;
