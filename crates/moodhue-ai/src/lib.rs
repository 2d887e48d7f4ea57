//! Classifier inference layer: ONNX Runtime sequence classification.

#[cfg(feature = "onnx")]
mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
