pub mod keyword;
pub mod lexicon;
pub mod tokenize;

use crate::error::Result;
use crate::types::config::{Engine, ModelSettings};
use crate::types::scoring::ScoreResult;
use keyword::KeywordModel;
use lexicon::LexiconScorer;

/// A sentiment engine. Implementations are pure: the same text always
/// yields the same result.
pub trait Scorer {
    fn name(&self) -> &'static str;
    fn predict(&self, text: &str) -> ScoreResult;
}

/// Builds the engine selected by `settings`. The keyword engine loads its
/// artifact when a path is configured and falls back to built-in word lists
/// otherwise.
pub fn build_scorer(settings: &ModelSettings) -> Result<Box<dyn Scorer>> {
    match settings.engine {
        Engine::Lexicon => {
            let scorer = LexiconScorer::default();
            tracing::debug!(
                positive = scorer.positive().len(),
                negative = scorer.negative().len(),
                "lexicon scorer ready"
            );
            Ok(Box::new(scorer))
        }
        Engine::Keyword => {
            let model = match &settings.keyword_path {
                Some(path) => KeywordModel::load(path)?,
                None => KeywordModel::default(),
            };
            tracing::debug!(
                artifact = ?settings.keyword_path,
                "keyword model ready"
            );
            Ok(Box::new(model))
        }
    }
}
