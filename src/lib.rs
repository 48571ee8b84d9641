//! # hocrtext
//!
//! Plain text extraction from hOCR documents, with byte-accurate page
//! offsets in both the XML source and the generated plaintext.
//!
//! The plaintext is meant for full-text indexing. The offset lists let a
//! search hit in the plaintext be traced back to the page markup it came
//! from.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hocrtext::{plain_text_from_path, LookupTable};
//!
//! fn main() -> hocrtext::Result<()> {
//!     let text = plain_text_from_path("book_hocr.html")?;
//!     let table = LookupTable::from_path("book_hocr.html")?;
//!
//!     if let Some(hit) = text.find("whale") {
//!         let page = table.page_for_text_offset(hit as u64);
//!         println!("first whale on page {:?}", page);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Streaming**: pages are parsed one at a time, never the whole DOM
//! - **Confidence filtering**: words below 75 are left out everywhere
//! - **Paragraph reconstruction**: hOCR paragraphs regrouped the way the
//!   full-text index sees them
//! - **Offset lookup**: binary search from a plaintext byte to its page

pub mod error;
pub mod model;
pub mod offsets;
pub mod parser;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{BBox, Line, Page, Paragraph, Word};
pub use offsets::{
    plaintext_page_offsets, xml_page_offsets, xml_page_offsets_from_path, LookupTable,
    PageBoundaryFinder, PageOffset, PlaintextPageOffsets, XmlPageOffsets,
};
pub use parser::{ExtractOptions, PageIterator};
pub use text::{
    page_text, paragraph_text, paragraph_words, Paragraphs, ReconstructedParagraph, WordFilter,
    MIN_WORD_CONFIDENCE,
};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Iterate over the pages of an hOCR file.
///
/// # Example
///
/// ```no_run
/// use hocrtext::pages_from_path;
///
/// for page in pages_from_path("book_hocr.html")? {
///     let page = page?;
///     println!("page {} is {:?}", page.index, page.dimensions());
/// }
/// # Ok::<(), hocrtext::Error>(())
/// ```
pub fn pages_from_path<P: AsRef<Path>>(path: P) -> Result<PageIterator<BufReader<File>>> {
    PageIterator::open(path)
}

/// Iterate over the pages of an hOCR stream, from its current position.
pub fn pages_from_reader<R: BufRead>(reader: R) -> PageIterator<R> {
    PageIterator::from_reader(reader)
}

/// Concatenate the page texts of a document.
///
/// The result is exactly the byte stream described by
/// [`plaintext_page_offsets`] for the same pages and filter.
pub fn plain_text<I>(pages: I, filter: &WordFilter) -> Result<String>
where
    I: IntoIterator<Item = Result<Page>>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(&page_text(&page?, filter));
    }
    Ok(text)
}

/// Extract plain text from an hOCR file.
///
/// # Example
///
/// ```no_run
/// use hocrtext::plain_text_from_path;
///
/// let text = plain_text_from_path("book_hocr.html").unwrap();
/// println!("{}", text);
/// ```
pub fn plain_text_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    plain_text(pages_from_path(path)?, &WordFilter::default())
}

/// Reconstructed paragraphs of an hOCR file.
pub fn paragraphs_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Paragraphs<PageIterator<BufReader<File>>>> {
    Ok(Paragraphs::new(pages_from_path(path)?))
}

/// Builder for extracting from hOCR files with shared options.
///
/// # Example
///
/// ```no_run
/// use hocrtext::HocrText;
///
/// let extractor = HocrText::new().with_min_confidence(60.0);
/// let text = extractor.text("book_hocr.html")?;
/// let table = extractor.lookup_table("book_hocr.html")?;
/// # Ok::<(), hocrtext::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HocrText {
    options: ExtractOptions,
}

impl HocrText {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the minimum word confidence.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.options = self.options.with_min_confidence(confidence);
        self
    }

    /// Set the confidence used for words without `x_wconf`.
    pub fn with_missing_confidence(mut self, confidence: f32) -> Self {
        self.options = self.options.with_missing_confidence(confidence);
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Page iterator over a file.
    pub fn pages<P: AsRef<Path>>(&self, path: P) -> Result<PageIterator<BufReader<File>>> {
        PageIterator::open_with_options(path, self.options.clone())
    }

    /// Plain text of a file.
    pub fn text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        plain_text(self.pages(path)?, &self.options.word_filter())
    }

    /// Reconstructed paragraphs of a file.
    pub fn paragraphs<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Paragraphs<PageIterator<BufReader<File>>>> {
        Ok(Paragraphs::with_filter(
            self.pages(path)?,
            self.options.word_filter(),
        ))
    }

    /// Plaintext page offsets of a file.
    pub fn plaintext_offsets<P: AsRef<Path>>(&self, path: P) -> Result<Vec<PageOffset>> {
        plaintext_page_offsets(self.pages(path)?, &self.options.word_filter())
    }

    /// XML/plaintext lookup table of a file.
    pub fn lookup_table<P: AsRef<Path>>(&self, path: P) -> Result<LookupTable> {
        LookupTable::from_path_with_options(path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAGES: &str = r#"<html><body>
<div class="ocr_page" title="bbox 0 0 100 200">
 <p class="ocr_par"><span class="ocr_line">
  <span class="ocrx_word" title="x_wconf 90">Call</span>
  <span class="ocrx_word" title="x_wconf 90">me</span>
 </span></p>
</div>
<div class="ocr_page" title="bbox 0 0 100 200">
 <p class="ocr_par"><span class="ocr_line">
  <span class="ocrx_word" title="x_wconf 80">Ishmael.</span>
  <span class="ocrx_word" title="x_wconf 20">smear</span>
 </span></p>
</div>
</body></html>"#;

    #[test]
    fn test_plain_text_from_reader() {
        let text = plain_text(pages_from_reader(TWO_PAGES.as_bytes()), &WordFilter::default())
            .unwrap();
        assert_eq!(text, " Call me\n Ishmael.\n");
    }

    #[test]
    fn test_builder_defaults() {
        let builder = HocrText::default();
        assert_eq!(builder.options().min_word_confidence, MIN_WORD_CONFIDENCE);
    }

    #[test]
    fn test_builder_chained() {
        let builder = HocrText::new()
            .with_min_confidence(10.0)
            .with_missing_confidence(50.0);
        assert_eq!(builder.options().min_word_confidence, 10.0);
        assert_eq!(builder.options().missing_confidence, 50.0);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            plain_text_from_path("/nonexistent/book_hocr.html"),
            Err(Error::Io(_))
        ));
        assert!(matches!(
            xml_page_offsets_from_path("/nonexistent/book_hocr.html"),
            Err(Error::Io(_))
        ));
    }
}
