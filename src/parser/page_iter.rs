//! Pull-based `ocr_page` iterator over a quick-xml event stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{Line, Page, Paragraph, Word};

use super::markup::{is_page_start, utf8, LINE_CLASSES, PARAGRAPH_CLASS, WORD_CLASS};
use super::options::ExtractOptions;
use super::title::{parse_bbox, parse_confidence};

/// Iterator over the pages of an hOCR document.
///
/// Each call to `next` reads just enough of the stream to complete one
/// page. After the first error the iterator is exhausted.
pub struct PageIterator<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    options: ExtractOptions,
    next_index: usize,
    // Open elements outside any page
    depth: usize,
    done: bool,
}

impl PageIterator<BufReader<File>> {
    /// Open an hOCR file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open an hOCR file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader_with_options(BufReader::new(file), options))
    }
}

impl<R: BufRead> PageIterator<R> {
    /// Read pages from the current position of `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with_options(reader, ExtractOptions::default())
    }

    /// Read pages from the current position of `reader` with custom options.
    pub fn from_reader_with_options(reader: R, options: ExtractOptions) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            options,
            next_index: 0,
            depth: 0,
            done: false,
        }
    }

    /// Skip to the next page start tag and parse the whole page.
    fn read_page(&mut self) -> Result<Option<Page>> {
        loop {
            self.buf.clear();
            let found = {
                let event = self
                    .reader
                    .read_event_into(&mut self.buf)
                    .map_err(|e| Error::malformed(self.reader.buffer_position(), e))?;
                let position = self.reader.buffer_position();
                match event {
                    Event::Start(ref e) if is_page_start(e) => {
                        Some((new_page(e, self.next_index, position)?, false))
                    }
                    Event::Empty(ref e) if is_page_start(e) => {
                        Some((new_page(e, self.next_index, position)?, true))
                    }
                    Event::Start(_) => {
                        self.depth += 1;
                        None
                    }
                    Event::End(_) => {
                        self.depth = self.depth.saturating_sub(1);
                        None
                    }
                    Event::Eof if self.depth > 0 => {
                        return Err(Error::malformed(
                            position,
                            format!("unexpected end of document, {} element(s) open", self.depth),
                        ));
                    }
                    Event::Eof => return Ok(None),
                    _ => None,
                }
            };

            if let Some((page, empty)) = found {
                self.next_index += 1;
                if empty {
                    return Ok(Some(page));
                }
                return self.read_page_body(page).map(Some);
            }
        }
    }

    fn read_page_body(&mut self, page: Page) -> Result<Page> {
        let mut builder = PageBuilder::new(page, self.options.missing_confidence);

        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|e| Error::malformed(self.reader.buffer_position(), e))?;
            let position = self.reader.buffer_position();
            match event {
                Event::Start(ref e) => builder.open(e, position)?,
                Event::Empty(ref e) => {
                    builder.open(e, position)?;
                    builder.close();
                }
                Event::End(_) => {
                    if builder.close() {
                        return Ok(builder.finish());
                    }
                }
                Event::Text(ref e) => {
                    if builder.in_word() {
                        let text = e.unescape().map_err(|err| Error::malformed(position, err))?;
                        builder.push_text(&text);
                    }
                }
                Event::CData(ref e) => {
                    if builder.in_word() {
                        builder.push_text(utf8(e, position)?);
                    }
                }
                Event::Eof => {
                    return Err(Error::malformed(
                        position,
                        "unexpected end of document inside ocr_page",
                    ));
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for PageIterator<R> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_page() {
            Ok(Some(page)) => Some(Ok(page)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// What an open element inside a page stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Paragraph,
    Line,
    Word,
    Other,
}

/// Element stack for one page.
struct PageBuilder {
    page: Page,
    stack: Vec<Frame>,
    paragraph: Option<Paragraph>,
    line: Option<Line>,
    word: Option<Word>,
    missing_confidence: f32,
}

impl PageBuilder {
    fn new(page: Page, missing_confidence: f32) -> Self {
        Self {
            page,
            stack: Vec::new(),
            paragraph: None,
            line: None,
            word: None,
            missing_confidence,
        }
    }

    fn in_word(&self) -> bool {
        self.word.is_some()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(word) = self.word.as_mut() {
            word.text.push_str(text);
        }
    }

    fn open(&mut self, e: &BytesStart<'_>, position: usize) -> Result<()> {
        let frame = self.classify(e, position)?;
        self.stack.push(frame);
        Ok(())
    }

    fn classify(&mut self, e: &BytesStart<'_>, position: usize) -> Result<Frame> {
        // Inline markup inside a word only contributes text
        if self.word.is_some() {
            return Ok(Frame::Other);
        }

        let class = match attribute(e, "class", position)? {
            Some(class) => class,
            None => return Ok(Frame::Other),
        };
        let has_class = |name: &str| class.split_whitespace().any(|c| c == name);

        if is_page_start(e) {
            log::warn!(
                "Nested ocr_page at byte {} inside page {}, ignored",
                position,
                self.page.index
            );
            return Ok(Frame::Other);
        }

        if has_class(WORD_CLASS) {
            if self.line.is_none() {
                log::debug!("ocrx_word outside a line at byte {}, ignored", position);
                return Ok(Frame::Other);
            }
            let title = attribute(e, "title", position)?.unwrap_or_default();
            let mut word = Word::new(
                String::new(),
                parse_confidence(&title).unwrap_or(self.missing_confidence),
            );
            word.bbox = parse_bbox(&title);
            self.word = Some(word);
            return Ok(Frame::Word);
        }

        if class.split_whitespace().any(|c| LINE_CLASSES.contains(&c)) {
            if self.paragraph.is_none() || self.line.is_some() {
                return Ok(Frame::Other);
            }
            let title = attribute(e, "title", position)?.unwrap_or_default();
            self.line = Some(Line {
                words: Vec::new(),
                bbox: parse_bbox(&title),
            });
            return Ok(Frame::Line);
        }

        if has_class(PARAGRAPH_CLASS) {
            if self.paragraph.is_some() {
                return Ok(Frame::Other);
            }
            let title = attribute(e, "title", position)?.unwrap_or_default();
            self.paragraph = Some(Paragraph {
                lines: Vec::new(),
                id: attribute(e, "id", position)?,
                lang: attribute(e, "lang", position)?,
                bbox: parse_bbox(&title),
            });
            return Ok(Frame::Paragraph);
        }

        Ok(Frame::Other)
    }

    /// Close the innermost element. Returns true when the page element
    /// itself was closed.
    fn close(&mut self) -> bool {
        match self.stack.pop() {
            None => true,
            Some(Frame::Word) => {
                if let (Some(word), Some(line)) = (self.word.take(), self.line.as_mut()) {
                    line.words.push(word);
                }
                false
            }
            Some(Frame::Line) => {
                if let (Some(line), Some(paragraph)) = (self.line.take(), self.paragraph.as_mut()) {
                    paragraph.add_line(line);
                }
                false
            }
            Some(Frame::Paragraph) => {
                if let Some(paragraph) = self.paragraph.take() {
                    self.page.add_paragraph(paragraph);
                }
                false
            }
            Some(Frame::Other) => false,
        }
    }

    fn finish(self) -> Page {
        self.page
    }
}

fn new_page(e: &BytesStart<'_>, index: usize, position: usize) -> Result<Page> {
    let title = attribute(e, "title", position)?.unwrap_or_default();
    let bbox = parse_bbox(&title).ok_or_else(|| {
        Error::Hocr(format!(
            "ocr_page {} at byte {} has no bbox",
            index, position
        ))
    })?;

    let mut page = Page::new(index, bbox);
    page.id = attribute(e, "id", position)?;
    Ok(page)
}

/// Read and unescape an attribute value.
fn attribute(e: &BytesStart<'_>, name: &str, position: usize) -> Result<Option<String>> {
    let attr = match e.try_get_attribute(name) {
        Ok(Some(attr)) => attr,
        Ok(None) => return Ok(None),
        Err(err) => return Err(Error::malformed(position, err)),
    };
    let value = attr
        .unescape_value()
        .map_err(|err| Error::malformed(position, err))?;
    Ok(Some(value.into_owned()))
}
