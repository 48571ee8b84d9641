//! Page-level types.

use super::{BBox, Paragraph};
use serde::{Deserialize, Serialize};

/// A single `ocr_page` of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Position of the page in document order (0-indexed)
    pub index: usize,

    /// Element id (`id` attribute)
    pub id: Option<String>,

    /// Page bounding box in pixels
    pub bbox: BBox,

    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Page {
    /// Create an empty page.
    pub fn new(index: usize, bbox: BBox) -> Self {
        Self {
            index,
            id: None,
            bbox,
            paragraphs: Vec::new(),
        }
    }

    /// Add a paragraph to the page.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get page dimensions as (width, height) tuple.
    ///
    /// hOCR page boxes start at the origin, so these are the lower-right
    /// corner of the page box.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.bbox.x1, self.bbox.y1)
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
