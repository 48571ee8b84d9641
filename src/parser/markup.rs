//! Element predicates shared by the page parser and the XML offset indexer.
//!
//! Both must agree on what a page is, otherwise the XML and plaintext
//! offset lists stop being parallel.

use quick_xml::events::{BytesEnd, BytesStart};

use crate::error::{Error, Result};

/// UTF-8 byte order mark. quick-xml skips it without counting it in the
/// reader position.
pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) const PAGE_CLASS: &[u8] = b"ocr_page";
pub(crate) const PARAGRAPH_CLASS: &str = "ocr_par";
pub(crate) const WORD_CLASS: &str = "ocrx_word";
pub(crate) const LINE_CLASSES: &[&str] = &[
    "ocr_line",
    "ocrx_line",
    "ocr_caption",
    "ocr_header",
    "ocr_textfloat",
];

/// `<div class="ocr_page">`, compared on the exact attribute value.
pub(crate) fn is_page_start(e: &BytesStart<'_>) -> bool {
    if e.local_name().as_ref() != b"div" {
        return false;
    }
    matches!(e.try_get_attribute("class"), Ok(Some(attr)) if attr.value.as_ref() == PAGE_CLASS)
}

/// Local element name is `body`.
pub(crate) fn is_body(local_name: &[u8]) -> bool {
    local_name == b"body"
}

/// Byte offset of the `<` of a start tag, given the reader position just
/// past its `>`.
pub(crate) fn start_tag_offset(e: &BytesStart<'_>, position: usize, empty: bool) -> usize {
    let markup = if empty { 3 } else { 2 };
    position.saturating_sub(e.len() + markup)
}

/// Byte offset of the `<` of an end tag, given the reader position just
/// past its `>`.
pub(crate) fn end_tag_offset(e: &BytesEnd<'_>, position: usize) -> usize {
    position.saturating_sub(e.len() + 3)
}

/// Decode raw event bytes, reporting invalid UTF-8 as malformed markup.
pub(crate) fn utf8(bytes: &[u8], position: usize) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|err| Error::malformed(position, err))
}
