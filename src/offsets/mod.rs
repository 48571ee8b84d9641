//! Page offset indexing.
//!
//! Two independent indexers describe the same pages in two byte spaces:
//! the hOCR XML source and the generated plaintext. Both produce one
//! [`PageOffset`] per page in document order, so the lists can be joined by
//! position into a [`LookupTable`].

mod lookup;
mod plaintext;
mod xml;

pub use lookup::LookupTable;
pub use plaintext::{plaintext_page_offsets, PlaintextPageOffsets};
pub use xml::{xml_page_offsets, xml_page_offsets_from_path, PageBoundaryFinder, XmlPageOffsets};

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageOffset {
    pub start: u64,
    pub end: u64,
}

impl PageOffset {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<(u64, u64)> for PageOffset {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}
