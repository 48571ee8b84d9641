//! hOCR document model.
//!
//! These types are what the page parser produces and what the text and
//! offset components consume. A page owns its paragraphs; lines and words
//! are owned by their parent and never shared.

mod bbox;
mod page;
mod paragraph;

pub use bbox::BBox;
pub use page::Page;
pub use paragraph::{Line, Paragraph, Word};
