//! Weighted keyword dictionary scorer.
//!
//! Sums per-word weights from a positive and a negative lexicon, labels the
//! text by the sign of the difference and derives a confidence from the
//! winning side's weight density.

use super::{tokenize, Scorer};
use crate::types::scoring::{Score, ScoreResult, Sentiment};
use std::collections::HashMap;

pub const ENGINE_NAME: &str = "lexicon";

const POSITIVE_WEIGHTS: [(&str, u32); 13] = [
    ("love", 3),
    ("excellent", 3),
    ("perfect", 3),
    ("amazing", 3),
    ("fantastic", 3),
    ("great", 2),
    ("good", 2),
    ("awesome", 2),
    ("wonderful", 2),
    ("superb", 2),
    ("best", 2),
    ("happy", 2),
    ("recommend", 2),
];

// hate, terrible and awful weigh 2, not 3. Existing scores depend on it.
const NEGATIVE_WEIGHTS: [(&str, u32); 10] = [
    ("hate", 2),
    ("terrible", 2),
    ("awful", 2),
    ("horrible", 3),
    ("worst", 3),
    ("bad", 2),
    ("poor", 2),
    ("disappointing", 2),
    ("trash", 2),
    ("sucks", 2),
];

const CONFIDENCE_SCALE: Score = 1.5;
const NEUTRAL_CONFIDENCE: Score = 0.5;
const BOOST_FLOOR: Score = 0.75;
const BOOST_THRESHOLD: Score = 1.0;

#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: HashMap<String, u32>,
}

impl Lexicon {
    /// Builds a lexicon; a word listed twice keeps its last weight.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let weights = entries
            .into_iter()
            .map(|(word, weight)| (word.to_string(), weight))
            .collect();
        Self { weights }
    }

    pub fn weight(&self, word: &str) -> u32 {
        self.weights.get(word).copied().unwrap_or(0)
    }

    pub fn score(&self, tokens: &[String]) -> Score {
        tokens
            .iter()
            .map(|token| Score::from(self.weight(token)))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    positive: Lexicon,
    negative: Lexicon,
}

impl LexiconScorer {
    pub fn new(positive: Lexicon, negative: Lexicon) -> Self {
        Self { positive, negative }
    }

    pub fn positive(&self) -> &Lexicon {
        &self.positive
    }

    pub fn negative(&self) -> &Lexicon {
        &self.negative
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(
            Lexicon::from_entries(POSITIVE_WEIGHTS),
            Lexicon::from_entries(NEGATIVE_WEIGHTS),
        )
    }
}

impl Scorer for LexiconScorer {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn predict(&self, text: &str) -> ScoreResult {
        let tokens = tokenize::tokens(text);
        if tokens.is_empty() {
            return ScoreResult::new(Sentiment::Neutral, NEUTRAL_CONFIDENCE);
        }

        let pos_score = self.positive.score(&tokens);
        let neg_score = self.negative.score(&tokens);
        let total_score = pos_score - neg_score;
        let token_count = tokens.len() as Score;

        let (sentiment, base_confidence) = if total_score > 0.0 {
            (
                Sentiment::Positive,
                (pos_score / token_count * CONFIDENCE_SCALE).min(1.0),
            )
        } else if total_score < 0.0 {
            (
                Sentiment::Negative,
                (neg_score / token_count * CONFIDENCE_SCALE).min(1.0),
            )
        } else {
            (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
        };

        let confidence = if total_score.abs() > BOOST_THRESHOLD {
            base_confidence.max(BOOST_FLOOR)
        } else {
            base_confidence
        };

        ScoreResult::new(sentiment, round_confidence(confidence)).with_scores(pos_score, neg_score)
    }
}

/// Rounds to two decimals, ties to even.
///
/// The decision is made on the exact binary value: `value * 100.0` alone can
/// round a near-midpoint value onto `k + 0.5`, so the distance to each
/// candidate is taken with a fused multiply-add, which rounds only once.
pub fn round_confidence(value: Score) -> Score {
    let exact_cmp = |candidate: Score| value.mul_add(100.0, -candidate);

    let mut lower = (value * 100.0).floor();
    if exact_cmp(lower) < 0.0 {
        lower -= 1.0;
    } else if exact_cmp(lower + 1.0) >= 0.0 {
        lower += 1.0;
    }

    let midpoint = exact_cmp(lower + 0.5);
    let cents = if midpoint > 0.0 || (midpoint == 0.0 && lower % 2.0 != 0.0) {
        lower + 1.0
    } else {
        lower
    };
    cents / 100.0
}
