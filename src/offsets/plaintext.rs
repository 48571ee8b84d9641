//! Page byte ranges in the generated plaintext.

use crate::error::Result;
use crate::model::Page;
use crate::text::{page_text, WordFilter};

use super::PageOffset;

/// Iterator of plaintext page ranges over a page iterator.
///
/// Ranges are contiguous and start at 0. Each one is as long as the UTF-8
/// encoding of that page's [`page_text`].
pub struct PlaintextPageOffsets<I> {
    pages: I,
    filter: WordFilter,
    cursor: u64,
    done: bool,
}

impl<I> PlaintextPageOffsets<I>
where
    I: Iterator<Item = Result<Page>>,
{
    pub fn new(pages: I) -> Self {
        Self::with_filter(pages, WordFilter::default())
    }

    pub fn with_filter(pages: I, filter: WordFilter) -> Self {
        Self {
            pages,
            filter,
            cursor: 0,
            done: false,
        }
    }

    /// Total plaintext length of the pages seen so far.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }
}

impl<I> Iterator for PlaintextPageOffsets<I>
where
    I: Iterator<Item = Result<Page>>,
{
    type Item = Result<PageOffset>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.pages.next() {
            Some(Ok(page)) => {
                let start = self.cursor;
                self.cursor += page_text(&page, &self.filter).len() as u64;
                Some(Ok(PageOffset::new(start, self.cursor)))
            }
            Some(Err(e)) => {
                self.done = true;
                Some(Err(e))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Collect the plaintext page ranges of a whole document.
pub fn plaintext_page_offsets<I>(pages: I, filter: &WordFilter) -> Result<Vec<PageOffset>>
where
    I: IntoIterator<Item = Result<Page>>,
{
    PlaintextPageOffsets::with_filter(pages.into_iter(), *filter).collect()
}
