//! Word confidence filtering.

use crate::model::Word;

/// Words below this OCR confidence never reach any text output.
pub const MIN_WORD_CONFIDENCE: f32 = 75.0;

/// Confidence threshold applied to every word before it contributes text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordFilter {
    min_confidence: f32,
}

impl WordFilter {
    pub fn new(min_confidence: f32) -> Self {
        Self { min_confidence }
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    /// The threshold itself passes.
    #[inline]
    pub fn accepts(&self, word: &Word) -> bool {
        word.confidence >= self.min_confidence
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new(MIN_WORD_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_boundary() {
        let filter = WordFilter::default();
        assert!(filter.accepts(&Word::new("kept", 75.0)));
        assert!(!filter.accepts(&Word::new("dropped", 74.0)));
        assert!(!filter.accepts(&Word::new("dropped", 74.99)));
        assert!(filter.accepts(&Word::new("kept", 100.0)));
    }

    #[test]
    fn test_custom_threshold() {
        let filter = WordFilter::new(0.0);
        assert!(filter.accepts(&Word::new("anything", 0.0)));
    }
}
