//! Streaming hOCR page parser.
//!
//! Produces one [`Page`](crate::model::Page) at a time from an XML byte
//! stream. Text and offset components only see the model types this module
//! emits.

pub(crate) mod markup;
mod options;
mod page_iter;
mod title;

pub use options::ExtractOptions;
pub use page_iter::PageIterator;
pub use title::{parse_bbox, parse_confidence};
