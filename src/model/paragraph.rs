//! Paragraph, line and word types.

use serde::{Deserialize, Serialize};

use super::BBox;

/// A recognized word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word text, with markup entities resolved
    pub text: String,

    /// OCR confidence (0-100)
    pub confidence: f32,

    /// Word position on the page
    pub bbox: Option<BBox>,
}

impl Word {
    /// Create a word without geometry.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox: None,
        }
    }

    /// Attach a bounding box.
    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}

/// A line of words, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub words: Vec<Word>,
    pub bbox: Option<BBox>,
}

impl Line {
    /// Create a line from words.
    pub fn new(words: Vec<Word>) -> Self {
        Self { words, bbox: None }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A paragraph of lines.
///
/// Paragraphs come straight from `ocr_par` elements, or are synthesized by
/// the paragraph reconstructor when several source paragraphs form one
/// logical block. Synthesized paragraphs carry no id, language or box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Lines in document order
    pub lines: Vec<Line>,

    /// Element id (`id` attribute)
    pub id: Option<String>,

    /// Declared language (`lang` attribute)
    pub lang: Option<String>,

    /// Paragraph position on the page
    pub bbox: Option<BBox>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a synthetic paragraph from lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Add a line to the paragraph.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Iterate over all words, regardless of confidence.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|line| line.words.iter())
    }

    /// Total number of words, regardless of confidence.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|line| line.words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }
}
