//! Text reconstruction from hOCR pages.
//!
//! Two text shapes are produced here. Page text is what gets written to
//! the plaintext stream and what the plaintext offsets describe. Paragraph
//! text is the raw word concatenation used to line hOCR paragraphs up with
//! the paragraphs of the full-text index.

mod assemble;
mod filter;
mod paragraphs;

pub use assemble::{page_text, paragraph_text, paragraph_words};
pub use filter::{WordFilter, MIN_WORD_CONFIDENCE};
pub use paragraphs::{Paragraphs, ReconstructedParagraph};
