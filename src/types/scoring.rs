use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Binary label: 1 for Positive, 0 for everything else.
    pub fn prediction(self) -> u8 {
        u8::from(matches!(self, Self::Positive))
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring a single text.
///
/// `pos_score` and `neg_score` are `None` when the engine does not report
/// them (the keyword model) or when the lexicon scorer found no tokens.
/// They are left out of the serialized form in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub sentiment: Sentiment,
    pub confidence: Score,
    pub prediction: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neg_score: Option<Score>,
}

impl ScoreResult {
    pub fn new(sentiment: Sentiment, confidence: Score) -> Self {
        Self {
            sentiment,
            confidence,
            prediction: sentiment.prediction(),
            pos_score: None,
            neg_score: None,
        }
    }

    pub fn with_scores(mut self, pos_score: Score, neg_score: Score) -> Self {
        self.pos_score = Some(pos_score);
        self.neg_score = Some(neg_score);
        self
    }
}
