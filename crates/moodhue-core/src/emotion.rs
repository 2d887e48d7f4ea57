//! The six coarse emotion categories and their per-category score vector.

use serde::{Deserialize, Serialize};

/// Coarse emotion category.
///
/// Declaration order is the canonical order: the argmax scan visits
/// categories in this order and keeps the first strict maximum, so ties
/// resolve to the earliest category. The wire names are lowercase and happen
/// to be alphabetical, so sorted-map iteration agrees with [`Emotion::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
}

impl Emotion {
    /// All categories in canonical order.
    pub const ALL: [Emotion; 6] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    /// Category used for degenerate input, low-confidence decisions, and
    /// the initial palette state.
    pub const DEFAULT: Emotion = Emotion::Joy;

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-category score vector in canonical order.
///
/// Cells accumulate sums of mapped fine-label scores, so a cell may exceed
/// 1.0 before normalization — several fine labels can feed one category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores([f32; 6]);

impl EmotionScores {
    /// The zero accumulator.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, emotion: Emotion) -> f32 {
        self.0[emotion.index()]
    }

    /// Add `value` into the cell for `emotion`.
    pub fn add(&mut self, emotion: Emotion, value: f32) {
        self.0[emotion.index()] += value;
    }

    /// Sum over all six cells.
    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Iterate cells in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f32)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Arithmetic mean of several vectors, per category.
    ///
    /// An empty input yields the zero vector; callers that require at least
    /// one sentence enforce that before averaging.
    pub fn mean(vectors: &[EmotionScores]) -> EmotionScores {
        if vectors.is_empty() {
            return EmotionScores::zero();
        }
        let mut sum = EmotionScores::zero();
        for v in vectors {
            for (i, cell) in v.0.iter().enumerate() {
                sum.0[i] += cell;
            }
        }
        let n = vectors.len() as f32;
        for cell in &mut sum.0 {
            *cell /= n;
        }
        sum
    }

    /// Rescale so the cells sum to 1.0.
    ///
    /// An all-zero vector stays all-zero — no division is performed and no
    /// category dominates; the threshold fallback handles the decision.
    pub fn normalized(&self) -> EmotionScores {
        let total = self.total();
        if total == 0.0 {
            return *self;
        }
        let mut out = *self;
        for cell in &mut out.0 {
            *cell /= total;
        }
        out
    }

    /// First-max argmax over canonical order.
    ///
    /// Starts from the first category and keeps the first strictly-greater
    /// value encountered, so equal maxima resolve to the earliest category.
    pub fn top(&self) -> (Emotion, f32) {
        let mut best = Emotion::ALL[0];
        let mut best_value = self.get(best);
        for emotion in Emotion::ALL.into_iter().skip(1) {
            let value = self.get(emotion);
            if value > best_value {
                best = emotion;
                best_value = value;
            }
        }
        (best, best_value)
    }
}

impl FromIterator<(Emotion, f32)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (Emotion, f32)>>(iter: I) -> Self {
        let mut scores = EmotionScores::zero();
        for (emotion, value) in iter {
            scores.add(emotion, value);
        }
        scores
    }
}
