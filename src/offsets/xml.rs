//! Page byte ranges in the hOCR XML source.
//!
//! A single forward scan records a marker at the `<` of every
//! `<div class="ocr_page">` start tag and at the `<` of `</body>`. Page `i`
//! runs from its own marker to the next one, so the last page ends where
//! the body closes. Bytes between a page's closing `</div>` and the next
//! page are attributed to the earlier page.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::parser::markup::{
    end_tag_offset, is_body, is_page_start, start_tag_offset, utf8, UTF8_BOM,
};

use super::PageOffset;

/// Page boundary state for a streaming XML scan.
///
/// Feed it element events with the byte offset of their tag, then pull
/// completed page ranges with [`pop_ready`](Self::pop_ready). With fewer
/// than two markers no range is ever produced: a document without pages,
/// or without a closing body, yields nothing for the unterminated page.
#[derive(Debug, Default)]
pub struct PageBoundaryFinder {
    markers: VecDeque<u64>,
    page_count: usize,
}

impl PageBoundaryFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an element start. Returns true when it opened a page.
    pub fn start_element(&mut self, e: &BytesStart<'_>, offset: u64) -> bool {
        if !is_page_start(e) {
            return false;
        }
        self.markers.push_back(offset);
        self.page_count += 1;
        true
    }

    /// Handle an element end. Returns true when it closed the body.
    pub fn end_element(&mut self, local_name: &[u8], offset: u64) -> bool {
        if !is_body(local_name) {
            return false;
        }
        self.markers.push_back(offset);
        true
    }

    /// Next completed page range, if two markers are known.
    pub fn pop_ready(&mut self) -> Option<PageOffset> {
        if self.markers.len() < 2 {
            return None;
        }
        let start = self.markers.pop_front()?;
        let end = *self.markers.front()?;
        Some(PageOffset::new(start, end))
    }

    /// Page start tags seen so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Iterator of XML page ranges over a byte stream.
///
/// Offsets are relative to where `reader` was positioned when passed in,
/// counting a leading byte order mark. Use [`xml_page_offsets`] for
/// absolute offsets of a seekable source.
///
/// The scan fails with [`Error::MalformedMarkup`] on invalid UTF-8 and on
/// input that ends while elements are still open.
pub struct XmlPageOffsets<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    finder: PageBoundaryFinder,
    // Bytes skipped by quick-xml before its first reported position
    base: usize,
    depth: usize,
    started: bool,
    done: bool,
}

impl<R: BufRead> XmlPageOffsets<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            finder: PageBoundaryFinder::new(),
            base: 0,
            depth: 0,
            started: false,
            done: false,
        }
    }

    fn detect_bom(&mut self) -> Result<()> {
        if self.reader.get_mut().fill_buf()?.starts_with(UTF8_BOM) {
            self.base = UTF8_BOM.len();
        }
        Ok(())
    }

    /// Read one event and feed it to the finder. Returns false at end of
    /// input.
    fn advance(&mut self) -> Result<bool> {
        if !self.started {
            self.started = true;
            self.detect_bom()?;
        }

        let base = self.base;
        self.buf.clear();
        let event = self
            .reader
            .read_event_into(&mut self.buf)
            .map_err(|e| Error::malformed(base + self.reader.buffer_position(), e))?;
        let position = base + self.reader.buffer_position();

        match event {
            Event::Start(ref e) => {
                utf8(e, position)?;
                self.depth += 1;
                self.finder
                    .start_element(e, start_tag_offset(e, position, false) as u64);
            }
            Event::Empty(ref e) => {
                utf8(e, position)?;
                let offset = start_tag_offset(e, position, true) as u64;
                self.finder.start_element(e, offset);
                self.finder.end_element(e.local_name().as_ref(), offset);
            }
            Event::End(ref e) => {
                utf8(e, position)?;
                self.depth = self.depth.saturating_sub(1);
                self.finder
                    .end_element(e.local_name().as_ref(), end_tag_offset(e, position) as u64);
            }
            Event::Text(ref e) => {
                utf8(e, position)?;
            }
            Event::CData(ref e) => {
                utf8(e, position)?;
            }
            Event::Comment(ref e) => {
                utf8(e, position)?;
            }
            Event::Eof if self.depth > 0 => {
                return Err(Error::malformed(
                    position,
                    format!("unexpected end of document, {} element(s) open", self.depth),
                ));
            }
            Event::Eof => return Ok(false),
            _ => {}
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for XmlPageOffsets<R> {
    type Item = Result<PageOffset>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(offset) = self.finder.pop_ready() {
                return Some(Ok(offset));
            }
            if self.done {
                return None;
            }

            match self.advance() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    log::debug!(
                        "XML scan finished: {} page start tag(s)",
                        self.finder.page_count()
                    );
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Collect the XML page ranges of a seekable source.
///
/// The source is rewound to its first byte before scanning, whatever its
/// current position.
pub fn xml_page_offsets<R: Read + Seek>(source: &mut R) -> Result<Vec<PageOffset>> {
    source.seek(SeekFrom::Start(0))?;
    XmlPageOffsets::from_reader(BufReader::new(source)).collect()
}

/// Collect the XML page ranges of an hOCR file.
pub fn xml_page_offsets_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PageOffset>> {
    let mut file = File::open(path)?;
    xml_page_offsets(&mut file)
}
