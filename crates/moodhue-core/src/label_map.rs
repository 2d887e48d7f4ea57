//! Fine-grained model labels → coarse emotion categories.

use crate::Emotion;

/// Map a fine-grained classifier label to its coarse category.
///
/// Case-insensitive. A label absent from the table contributes nothing to
/// aggregation — it is dropped, not an error. The table must be kept in sync
/// by hand with the label set of the deployed model; omissions degrade
/// quality silently, which is an accepted operational risk.
///
/// Most positive and neutral fine labels collapse onto joy, which doubles as
/// the neutral bucket.
pub fn map_label(label: &str) -> Option<Emotion> {
    let lower = label.to_ascii_lowercase();
    Some(match lower.as_str() {
        "anger" | "annoyance" => Emotion::Anger,
        "disgust" => Emotion::Disgust,
        "fear" | "nervousness" => Emotion::Fear,
        "sadness" | "disappointment" | "remorse" | "grief" => Emotion::Sadness,
        "surprise" => Emotion::Surprise,
        "joy" | "amusement" | "excitement" | "love" | "admiration" | "approval" | "caring"
        | "confusion" | "curiosity" | "desire" | "embarrassment" | "gratitude" | "optimism"
        | "pride" | "realization" | "relief" | "neutral" => Emotion::Joy,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_labels_map_to_themselves() {
        assert_eq!(map_label("anger"), Some(Emotion::Anger));
        assert_eq!(map_label("disgust"), Some(Emotion::Disgust));
        assert_eq!(map_label("fear"), Some(Emotion::Fear));
        assert_eq!(map_label("joy"), Some(Emotion::Joy));
        assert_eq!(map_label("sadness"), Some(Emotion::Sadness));
        assert_eq!(map_label("surprise"), Some(Emotion::Surprise));
    }

    #[test]
    fn fine_labels_collapse_to_coarse() {
        assert_eq!(map_label("annoyance"), Some(Emotion::Anger));
        assert_eq!(map_label("nervousness"), Some(Emotion::Fear));
        assert_eq!(map_label("grief"), Some(Emotion::Sadness));
        assert_eq!(map_label("disappointment"), Some(Emotion::Sadness));
        assert_eq!(map_label("remorse"), Some(Emotion::Sadness));
    }

    #[test]
    fn positive_and_neutral_labels_collapse_to_joy() {
        for label in [
            "amusement",
            "excitement",
            "love",
            "admiration",
            "approval",
            "caring",
            "confusion",
            "curiosity",
            "desire",
            "embarrassment",
            "gratitude",
            "optimism",
            "pride",
            "realization",
            "relief",
            "neutral",
        ] {
            assert_eq!(map_label(label), Some(Emotion::Joy), "label {label:?}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(map_label("ANGER"), Some(Emotion::Anger));
        assert_eq!(map_label("Surprise"), Some(Emotion::Surprise));
        assert_eq!(map_label("NeUtRaL"), Some(Emotion::Joy));
    }

    #[test]
    fn unknown_labels_are_dropped() {
        assert_eq!(map_label("disapproval"), None);
        assert_eq!(map_label("boredom"), None);
        assert_eq!(map_label(""), None);
    }
}
