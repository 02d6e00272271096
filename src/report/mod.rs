pub mod json;
pub mod md;

use crate::error::SentimentError;
use crate::types::report::BatchReport;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &ScoreResult, format: OutputFormat) -> Result<String, SentimentError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(SentimentError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String, SentimentError> {
    match format {
        OutputFormat::Json => json::batch_to_json(report).map_err(SentimentError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(report)),
    }
}
