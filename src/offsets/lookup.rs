//! XML <-> plaintext page lookup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{ExtractOptions, PageIterator};

use super::{plaintext_page_offsets, xml_page_offsets_from_path, PageOffset};

/// Parallel XML and plaintext page ranges, joined by page index.
///
/// A plaintext byte offset (for example the position of a search hit) is
/// mapped to its page by binary search over the text ranges, and from
/// there to the page's range in the XML source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    xml: Vec<PageOffset>,
    text: Vec<PageOffset>,
}

impl LookupTable {
    /// Join two offset lists. They must describe the same number of pages.
    pub fn build(xml: Vec<PageOffset>, text: Vec<PageOffset>) -> Result<Self> {
        if xml.len() != text.len() {
            return Err(Error::PageCountMismatch {
                xml: xml.len(),
                text: text.len(),
            });
        }
        Ok(Self { xml, text })
    }

    /// Run both indexers over an hOCR file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_options(path, &ExtractOptions::default())
    }

    /// Run both indexers over an hOCR file with custom options.
    pub fn from_path_with_options<P: AsRef<Path>>(
        path: P,
        options: &ExtractOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let xml = xml_page_offsets_from_path(path)?;
        let pages = PageIterator::open_with_options(path, options.clone())?;
        let text = plaintext_page_offsets(pages, &options.word_filter())?;
        log::debug!("Lookup table for {}: {} page(s)", path.display(), xml.len());
        Self::build(xml, text)
    }

    pub fn len(&self) -> usize {
        self.xml.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xml.is_empty()
    }

    pub fn xml_offsets(&self) -> &[PageOffset] {
        &self.xml
    }

    pub fn text_offsets(&self) -> &[PageOffset] {
        &self.text
    }

    /// `(xml, text)` ranges for one page.
    pub fn get(&self, page: usize) -> Option<(PageOffset, PageOffset)> {
        Some((*self.xml.get(page)?, *self.text.get(page)?))
    }

    /// Iterate over `(xml, text)` ranges in page order.
    pub fn iter(&self) -> impl Iterator<Item = (PageOffset, PageOffset)> + '_ {
        self.xml.iter().copied().zip(self.text.iter().copied())
    }

    /// Page whose plaintext contains `offset`.
    ///
    /// Pages without text have empty ranges and are never returned.
    pub fn page_for_text_offset(&self, offset: u64) -> Option<usize> {
        find_page(&self.text, offset)
    }

    /// Page whose XML range contains `offset`.
    pub fn page_for_xml_offset(&self, offset: u64) -> Option<usize> {
        find_page(&self.xml, offset)
    }

    /// XML range of the page holding plaintext byte `offset`.
    pub fn xml_range_for_text_offset(&self, offset: u64) -> Option<PageOffset> {
        self.page_for_text_offset(offset)
            .and_then(|page| self.xml.get(page).copied())
    }
}

/// Binary search over sorted, non-overlapping ranges.
fn find_page(ranges: &[PageOffset], offset: u64) -> Option<usize> {
    // First range ending after `offset`; empty ranges before it are skipped
    let index = ranges.partition_point(|r| r.end <= offset);
    ranges
        .get(index)
        .filter(|r| r.contains(offset))
        .map(|_| index)
}
