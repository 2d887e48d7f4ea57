//! ONNX Runtime pipeline for emotion sequence-classification models.
//!
//! Works with single-sentence BERT-style classifiers exported to ONNX
//! (e.g. bhadresh-savani/bert-base-uncased-emotion). The model directory
//! must contain `model.onnx`, `tokenizer.json`, and `config.json`; the
//! fine-label names come from `config.json`'s `id2label` table.

use std::collections::BTreeMap;
use std::path::Path;

use moodhue_core::{ClassifierError, EmotionClassifier, LabelScore};
use ort::session::Session;
use ort::value::Tensor;
use serde::Deserialize;
use tokenizers::Tokenizer;
use tracing::info;

// BERT-base positional limit.
const MAX_SEQ_LEN: usize = 512;

/// Emotion classifier backed by a local ONNX Runtime session.
///
/// One forward pass per sentence; the logit for every fine label is squashed
/// through a sigmoid, so the returned scores are independent per-label
/// confidences rather than a normalized distribution.
pub struct OnnxClassifier {
    session: Session,
    tokenizer: Tokenizer,
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct ModelConfig {
    id2label: BTreeMap<String, String>,
}

impl OnnxClassifier {
    /// Load a classifier from a directory containing `model.onnx`,
    /// `tokenizer.json`, and `config.json`.
    pub fn load(model_dir: &Path) -> anyhow::Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        let config_path = model_dir.join("config.json");

        anyhow::ensure!(model_path.exists(), "model.onnx not found in {model_dir:?}");
        anyhow::ensure!(
            tokenizer_path.exists(),
            "tokenizer.json not found in {model_dir:?}"
        );
        anyhow::ensure!(
            config_path.exists(),
            "config.json not found in {model_dir:?}"
        );

        let session = Session::builder()?.commit_from_file(&model_path)?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("load tokenizer: {e}"))?;
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("set truncation: {e}"))?;

        let config = std::fs::read_to_string(&config_path)?;
        let labels = labels_from_config(&config)?;

        info!(
            labels = labels.len(),
            model = %model_path.display(),
            "loaded classifier model"
        );
        Ok(Self {
            session,
            tokenizer,
            labels,
        })
    }

    /// Fine-label names in model output order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl EmotionClassifier for OnnxClassifier {
    fn classify(&mut self, sentence: &str) -> Result<Vec<LabelScore>, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode(sentence, true)
            .map_err(|e| ClassifierError::Tokenize(e.to_string()))?;

        let seq_len = encoding.get_ids().len();
        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| t as i64)
            .collect();

        let shape = [1i64, seq_len as i64];
        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let type_tensor = Tensor::from_array((shape, token_type_ids.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let outputs = self
            .session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        // Logits: [1, num_labels].
        let (output_shape, logits) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let dims: &[i64] = output_shape;
        if dims.len() != 2 || dims[0] != 1 || dims[1] as usize != self.labels.len() {
            return Err(ClassifierError::ModelShape(format!(
                "logits shape {dims:?}, expected [1, {}]",
                self.labels.len()
            )));
        }

        Ok(self
            .labels
            .iter()
            .zip(logits)
            .map(|(label, &logit)| LabelScore {
                label: label.clone(),
                score: sigmoid(logit),
            })
            .collect())
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Extract index-ordered fine-label names from a model `config.json`.
fn labels_from_config(config_json: &str) -> anyhow::Result<Vec<String>> {
    let config: ModelConfig =
        serde_json::from_str(config_json).map_err(|e| anyhow::anyhow!("parse config.json: {e}"))?;

    let mut entries = Vec::with_capacity(config.id2label.len());
    for (key, label) in config.id2label {
        let index: usize = key
            .parse()
            .map_err(|_| anyhow::anyhow!("non-numeric id2label key {key:?}"))?;
        entries.push((index, label));
    }
    entries.sort_by_key(|(index, _)| *index);

    anyhow::ensure!(!entries.is_empty(), "id2label table is empty");
    anyhow::ensure!(
        entries.last().map(|(i, _)| *i) == Some(entries.len() - 1),
        "id2label indices are not contiguous from 0"
    );

    Ok(entries.into_iter().map(|(_, label)| label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sigmoid_stays_in_unit_interval() {
        for x in [-20.0, -1.0, 0.0, 1.0, 20.0] {
            let s = sigmoid(x);
            assert!((0.0..=1.0).contains(&s), "sigmoid({x}) = {s}");
        }
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn labels_parse_in_index_order() {
        let config = r#"{
            "id2label": {"1": "joy", "0": "sadness", "2": "love", "3": "anger"},
            "model_type": "bert"
        }"#;
        let labels = labels_from_config(config).unwrap();
        assert_eq!(labels, ["sadness", "joy", "love", "anger"]);
    }

    #[test]
    fn labels_reject_gaps() {
        let config = r#"{"id2label": {"0": "sadness", "2": "love"}}"#;
        assert!(labels_from_config(config).is_err());
    }

    #[test]
    fn labels_reject_non_numeric_keys() {
        let config = r#"{"id2label": {"zero": "sadness"}}"#;
        assert!(labels_from_config(config).is_err());
    }

    #[test]
    fn labels_reject_empty_table() {
        let config = r#"{"id2label": {}}"#;
        assert!(labels_from_config(config).is_err());
    }

    // ── Model-dependent tests ──

    fn model_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("bert-base-uncased-emotion")
    }

    fn require_model() -> PathBuf {
        let dir = model_dir();
        if !dir.join("model.onnx").exists() {
            panic!(
                "Model not found. Download from HuggingFace:\n  \
                 curl -L -o models/bert-base-uncased-emotion/model.onnx \
                 https://huggingface.co/bhadresh-savani/bert-base-uncased-emotion/resolve/main/onnx/model.onnx"
            );
        }
        dir
    }

    #[test]
    #[ignore = "needs the ONNX model files on disk"]
    fn load_model() {
        let dir = require_model();
        let classifier = OnnxClassifier::load(&dir).unwrap();
        assert_eq!(classifier.labels().len(), 6);
    }

    #[test]
    #[ignore = "needs the ONNX model files on disk"]
    fn classify_returns_full_label_set() {
        let dir = require_model();
        let mut classifier = OnnxClassifier::load(&dir).unwrap();
        let scores = classifier.classify("I am over the moon today").unwrap();
        assert_eq!(scores.len(), classifier.labels().len());
        for LabelScore { label, score } in &scores {
            assert!(
                (0.0..=1.0).contains(score),
                "{label} score {score} out of range"
            );
        }
    }
}
