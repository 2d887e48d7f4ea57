//! Core types and the document-level emotion aggregation pipeline.

pub mod emotion;
pub mod label_map;
pub mod palette;
pub mod pipeline;
pub mod segment;

pub use emotion::{Emotion, EmotionScores};
pub use label_map::map_label;
pub use palette::{Palette, PaletteStore, palette_for};
pub use pipeline::{
    Analysis, AnalyzeError, CONFIDENCE_FLOOR, ClassifierError, EmotionClassifier, LabelScore,
    analyze,
};
pub use segment::split_sentences;
