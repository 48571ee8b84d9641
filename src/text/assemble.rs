//! Flattening paragraph/line/word trees into strings.

use crate::model::{Page, Paragraph, Word};

use super::WordFilter;

/// Plaintext for one page.
///
/// Every non-empty line is written as a single space followed by its words,
/// space separated. A paragraph with at least one accepted word ends with a
/// newline. Concatenating the results for all pages gives the document
/// plaintext.
pub fn page_text(page: &Page, filter: &WordFilter) -> String {
    let mut text = String::new();

    for paragraph in &page.paragraphs {
        let mut has_content = false;
        for line in &paragraph.lines {
            let mut line_words = String::new();
            for word in line.words.iter().filter(|w| filter.accepts(w)) {
                line_words.push_str(&word.text);
                line_words.push(' ');
                has_content = true;
            }

            let line_words = line_words.trim();
            if !line_words.is_empty() {
                text.push(' ');
                text.push_str(line_words);
            }
        }

        if has_content {
            text.push('\n');
        }
    }

    text
}

/// Text of a paragraph as the full-text index sees it.
///
/// Accepted words are concatenated with a trailing space each, with no
/// trimming and no line breaks. The flag is true when at least one word
/// passed the filter.
pub fn paragraph_text(paragraph: &Paragraph, filter: &WordFilter) -> (String, bool) {
    let mut text = String::new();
    let mut has_content = false;

    for word in paragraph.words().filter(|w| filter.accepts(w)) {
        text.push_str(&word.text);
        text.push(' ');
        has_content = true;
    }

    (text, has_content)
}

/// Words of a paragraph that pass the filter, in reading order.
///
/// Only paragraphs produced by [`Paragraphs`](super::Paragraphs) line up
/// word-for-word with the indexed text.
pub fn paragraph_words<'a>(paragraph: &'a Paragraph, filter: &WordFilter) -> Vec<&'a Word> {
    paragraph.words().filter(|w| filter.accepts(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Line};

    fn line(words: &[(&str, f32)]) -> Line {
        Line::new(words.iter().map(|(t, c)| Word::new(*t, *c)).collect())
    }

    fn page(paragraphs: Vec<Paragraph>) -> Page {
        let mut page = Page::new(0, BBox::new(0, 0, 100, 100));
        page.paragraphs = paragraphs;
        page
    }

    #[test]
    fn test_paragraph_text() {
        let p = Paragraph::from_lines(vec![
            line(&[("Hello", 90.0), ("noise", 12.0)]),
            line(&[("world", 75.0)]),
        ]);
        let (text, ok) = paragraph_text(&p, &WordFilter::default());
        assert_eq!(text, "Hello world ");
        assert!(ok);
    }

    #[test]
    fn test_paragraph_text_empty() {
        let (text, ok) = paragraph_text(&Paragraph::new(), &WordFilter::default());
        assert_eq!(text, "");
        assert!(!ok);

        let p = Paragraph::from_lines(vec![line(&[("faint", 74.0)])]);
        assert_eq!(paragraph_text(&p, &WordFilter::default()), (String::new(), false));
    }

    #[test]
    fn test_page_text() {
        let page = page(vec![
            Paragraph::from_lines(vec![
                line(&[("First", 90.0), ("line", 90.0)]),
                line(&[("second", 90.0), ("hidden", 30.0)]),
            ]),
            Paragraph::from_lines(vec![line(&[("hidden", 10.0)])]),
            Paragraph::from_lines(vec![line(&[("Last", 80.0)])]),
        ]);
        assert_eq!(
            page_text(&page, &WordFilter::default()),
            " First line second\n Last\n"
        );
    }

    #[test]
    fn test_page_text_trims_line_edges() {
        let page = page(vec![Paragraph::from_lines(vec![line(&[
            (" padded", 90.0),
            ("word ", 90.0),
        ])])]);
        assert_eq!(page_text(&page, &WordFilter::default()), " padded word\n");
    }

    #[test]
    fn test_page_text_blank_word_still_terminates_paragraph() {
        let page = page(vec![Paragraph::from_lines(vec![line(&[("", 90.0)])])]);
        assert_eq!(page_text(&page, &WordFilter::default()), "\n");
    }

    #[test]
    fn test_page_text_empty_page() {
        assert_eq!(page_text(&page(Vec::new()), &WordFilter::default()), "");
    }

    #[test]
    fn test_paragraph_words() {
        let p = Paragraph::from_lines(vec![
            line(&[("a", 80.0), ("b", 20.0)]),
            line(&[("c", 75.0), ("d", 74.0)]),
        ]);
        let words: Vec<_> = paragraph_words(&p, &WordFilter::default())
            .into_iter()
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(words, vec!["a", "c"]);
    }
}
