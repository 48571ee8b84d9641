//! Paragraph reconstruction.
//!
//! hOCR paragraph boundaries do not always match the paragraphs of the
//! full-text index. A paragraph without any accepted word produces no
//! indexed text, so the index folds it into the next paragraph that has
//! text. [`Paragraphs`] replays that folding over a page stream.

use serde::Serialize;

use crate::error::Result;
use crate::model::{Page, Paragraph};

use super::{paragraph_text, WordFilter};

/// A paragraph exactly as it appears in the full-text index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconstructedParagraph {
    /// The source paragraph, or a merge of several consecutive ones
    pub paragraph: Paragraph,

    /// Text of the content-bearing paragraph, see [`paragraph_text`]
    pub text: String,

    /// Index of the page holding the content-bearing paragraph
    pub page_index: usize,

    pub page_width: u32,

    pub page_height: u32,
}

/// Iterator of reconstructed paragraphs over a page iterator.
///
/// Pages are pulled one at a time. Zero-content paragraphs are held back
/// and their lines are prepended to the next paragraph that has content,
/// even across page boundaries. Held-back paragraphs still pending when
/// the pages run out are dropped.
pub struct Paragraphs<I> {
    pages: I,
    filter: WordFilter,
    pending: Vec<Paragraph>,
    current: Option<CurrentPage>,
    done: bool,
}

/// The page being drained, with its paragraphs in reverse for cheap pops.
struct CurrentPage {
    index: usize,
    width: u32,
    height: u32,
    paragraphs: Vec<Paragraph>,
}

impl<I> Paragraphs<I>
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
            pending: Vec::new(),
            current: None,
            done: false,
        }
    }

    /// Number of zero-content paragraphs waiting for a content paragraph.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take the next source paragraph, pulling a new page when needed.
    fn next_source(&mut self) -> Option<Result<(Paragraph, usize, u32, u32)>> {
        loop {
            if let Some(page) = self.current.as_mut() {
                if let Some(paragraph) = page.paragraphs.pop() {
                    return Some(Ok((paragraph, page.index, page.width, page.height)));
                }
            }

            // Page indices count pages seen, in document order
            let index = match self.current.take() {
                Some(page) => page.index + 1,
                None => 0,
            };
            let page = match self.pages.next()? {
                Ok(page) => page,
                Err(e) => return Some(Err(e)),
            };

            let (width, height) = page.dimensions();
            let mut paragraphs = page.paragraphs;
            paragraphs.reverse();
            self.current = Some(CurrentPage {
                index,
                width,
                height,
                paragraphs,
            });
        }
    }
}

impl<I> Iterator for Paragraphs<I>
where
    I: Iterator<Item = Result<Page>>,
{
    type Item = Result<ReconstructedParagraph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let (paragraph, page_index, page_width, page_height) = match self.next_source() {
                Some(Ok(source)) => source,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    if !self.pending.is_empty() {
                        log::debug!(
                            "Dropping {} trailing paragraph(s) without content",
                            self.pending.len()
                        );
                        self.pending.clear();
                    }
                    return None;
                }
            };

            let (text, has_content) = paragraph_text(&paragraph, &self.filter);
            if !has_content {
                self.pending.push(paragraph);
                continue;
            }

            let paragraph = if self.pending.is_empty() {
                paragraph
            } else {
                let lines = self
                    .pending
                    .drain(..)
                    .chain(std::iter::once(paragraph))
                    .flat_map(|p| p.lines)
                    .collect();
                Paragraph::from_lines(lines)
            };

            return Some(Ok(ReconstructedParagraph {
                paragraph,
                text,
                page_index,
                page_width,
                page_height,
            }));
        }
    }
}
