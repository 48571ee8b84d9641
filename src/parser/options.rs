//! Extraction options and configuration.

use crate::text::{WordFilter, MIN_WORD_CONFIDENCE};

/// Options for reading hOCR documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Words below this confidence are excluded from all text output
    pub min_word_confidence: f32,

    /// Confidence assigned to words that carry no `x_wconf` property
    pub missing_confidence: f32,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum word confidence.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_word_confidence = confidence;
        self
    }

    /// Set the confidence used for words without `x_wconf`.
    pub fn with_missing_confidence(mut self, confidence: f32) -> Self {
        self.missing_confidence = confidence;
        self
    }

    /// Word filter matching these options.
    pub fn word_filter(&self) -> WordFilter {
        WordFilter::new(self.min_word_confidence)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_word_confidence: MIN_WORD_CONFIDENCE,
            missing_confidence: 100.0,
        }
    }
}
