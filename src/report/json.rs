use crate::types::report::BatchReport;
use crate::types::scoring::ScoreResult;

/// Compact form; this is the `/predict` wire shape.
pub fn to_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

pub fn batch_to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
