//! Document-level emotion analysis: per-sentence classifier output folded
//! into a single thresholded decision.
//!
//! Sentences are classified strictly in segmentation order, one at a time.
//! Mapped fine-label scores accumulate per sentence, are averaged across the
//! document, normalized to a distribution, and the argmax is taken in
//! canonical category order. A winner below [`CONFIDENCE_FLOOR`] falls back
//! to [`Emotion::DEFAULT`]; the reported distribution is the actual one
//! either way.

use thiserror::Error;
use tracing::debug;

use crate::palette::{Palette, palette_for};
use crate::{Emotion, EmotionScores, map_label, split_sentences};

/// Minimum normalized confidence required to commit to the argmax category.
///
/// Short or ambiguous text tends to spread mass thinly; below this floor the
/// decision is overridden to [`Emotion::DEFAULT`].
pub const CONFIDENCE_FLOOR: f32 = 0.35;

/// One (fine label, confidence) pair from the classifier.
#[derive(Debug, Clone)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Failure raised by a classifier implementation.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("tokenization failed: {0}")]
    Tokenize(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("unexpected model output: {0}")]
    ModelShape(String),
}

/// The external classification capability.
///
/// Given one sentence, returns the model's complete set of per-label
/// confidences. Scores are independent, not mutually exclusive, and not
/// required to sum to 1. Implementations are invoked sequentially from a
/// single call site per document.
pub trait EmotionClassifier {
    fn classify(&mut self, sentence: &str) -> Result<Vec<LabelScore>, ClassifierError>;
}

/// Why an analysis produced no decision.
///
/// The serving layer maps both kinds to the default payload; neither is ever
/// surfaced to the caller as an error status.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Input was missing, empty, or segmented to zero sentences. The
    /// classifier is never invoked and the palette store is untouched.
    #[error("no sentences in input")]
    DegenerateInput,

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// A completed document-level decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Decided category, after the threshold fallback.
    pub emotion: Emotion,
    /// The actual normalized distribution, unaffected by the fallback.
    pub scores: EmotionScores,
}

impl Analysis {
    /// The palette of the decided category.
    pub fn palette(&self) -> &'static Palette {
        palette_for(self.emotion)
    }
}

/// Run the full aggregation pipeline over `text`.
pub fn analyze<C>(classifier: &mut C, text: &str) -> Result<Analysis, AnalyzeError>
where
    C: EmotionClassifier + ?Sized,
{
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Err(AnalyzeError::DegenerateInput);
    }

    let mut per_sentence = Vec::with_capacity(sentences.len());
    for sentence in &sentences {
        let raw = classifier.classify(sentence)?;
        let mut scores = EmotionScores::zero();
        for LabelScore { label, score } in raw {
            if let Some(emotion) = map_label(&label) {
                scores.add(emotion, score);
            }
        }
        debug!(sentence = %sentence, ?scores, "classified sentence");
        per_sentence.push(scores);
    }

    let distribution = EmotionScores::mean(&per_sentence).normalized();
    let (winner, confidence) = distribution.top();
    let emotion = if confidence < CONFIDENCE_FLOOR {
        Emotion::DEFAULT
    } else {
        winner
    };
    debug!(
        winner = winner.as_str(),
        confidence,
        decided = emotion.as_str(),
        "document decision"
    );

    Ok(Analysis {
        emotion,
        scores: distribution,
    })
}
