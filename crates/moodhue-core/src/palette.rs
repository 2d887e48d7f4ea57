//! Per-emotion color palettes and the shared latest-palette state.

use std::sync::RwLock;

use crate::Emotion;

/// Ordered set of five color tokens for UI theming.
pub type Palette = [&'static str; 5];

const ANGER: Palette = ["#ffd6cc", "#fbb1a1", "#ffb3a7", "#e57373", "#ff8a80"];
const DISGUST: Palette = ["#e0c5de", "#d4afcd", "#cba6c3", "#bfa5c0", "#b199b3"];
const FEAR: Palette = ["#e6e6fa", "#d8d8ff", "#ccccff", "#b2b2ff", "#9999ff"];
const JOY: Palette = ["#ffe4f0", "#ffc1da", "#ff9fcc", "#ff7fbf", "#ff60b3"];
const SADNESS: Palette = ["#cce0b4", "#b0d189", "#a2c46f", "#90b957", "#8ab64a"];
const SURPRISE: Palette = ["#fffacc", "#fff799", "#fff47d", "#fff066", "#ffeb3b"];

/// The pastel palette for one emotion category.
pub fn palette_for(emotion: Emotion) -> &'static Palette {
    match emotion {
        Emotion::Anger => &ANGER,
        Emotion::Disgust => &DISGUST,
        Emotion::Fear => &FEAR,
        Emotion::Joy => &JOY,
        Emotion::Sadness => &SADNESS,
        Emotion::Surprise => &SURPRISE,
    }
}

/// Last-decided palette, shared across requests.
///
/// Seeded with the default category's palette at construction, so a read can
/// never observe an uninitialized value. Writers take the lock one at a
/// time; last write wins, with no history or expiry.
pub struct PaletteStore {
    current: RwLock<&'static Palette>,
}

impl PaletteStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(palette_for(Emotion::DEFAULT)),
        }
    }

    /// Overwrite the stored palette.
    pub fn set(&self, palette: &'static Palette) {
        // The guarded value is a &'static, so a poisoned lock cannot hold a
        // partially-written palette; recover the inner value either way.
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = palette;
    }

    /// The most recently stored palette.
    pub fn get(&self) -> &'static Palette {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_five_colors() {
        for emotion in Emotion::ALL {
            let palette = palette_for(emotion);
            assert_eq!(palette.len(), 5, "{}", emotion.as_str());
            for color in palette {
                assert!(color.starts_with('#'), "{color} is not a hex token");
                assert_eq!(color.len(), 7, "{color} is not #rrggbb");
            }
        }
    }

    #[test]
    fn palettes_are_distinct_per_category() {
        for (i, a) in Emotion::ALL.iter().enumerate() {
            for b in &Emotion::ALL[i + 1..] {
                assert_ne!(palette_for(*a), palette_for(*b));
            }
        }
    }

    #[test]
    fn store_is_seeded_with_default_palette() {
        let store = PaletteStore::new();
        assert_eq!(store.get(), palette_for(Emotion::DEFAULT));
        assert_eq!(store.get(), palette_for(Emotion::Joy));
    }

    #[test]
    fn set_overwrites() {
        let store = PaletteStore::new();
        store.set(palette_for(Emotion::Anger));
        assert_eq!(store.get(), palette_for(Emotion::Anger));
    }

    #[test]
    fn last_write_wins() {
        let store = PaletteStore::new();
        store.set(palette_for(Emotion::Fear));
        store.set(palette_for(Emotion::Surprise));
        assert_eq!(store.get(), palette_for(Emotion::Surprise));
    }
}
