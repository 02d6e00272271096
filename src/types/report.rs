use crate::types::scoring::{ScoreResult, Sentiment};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentScore {
    pub path: String,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub engine: String,
    pub documents: Vec<DocumentScore>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(engine: impl Into<String>, documents: Vec<DocumentScore>) -> Self {
        let mut summary = BatchSummary {
            total: documents.len(),
            ..BatchSummary::default()
        };
        for document in &documents {
            match document.result.sentiment {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
        }
        Self {
            engine: engine.into(),
            documents,
            summary,
        }
    }
}
