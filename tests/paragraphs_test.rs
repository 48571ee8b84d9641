//! Integration tests for paragraph reconstruction.

mod common;

use hocrtext::{paragraph_words, paragraphs_from_path, HocrText, Paragraphs, WordFilter};

use common::{hocr, sample_document, write_temp};

#[test]
fn test_reconstructed_paragraphs() {
    let file = write_temp(&sample_document());
    let paragraphs: Vec<_> = paragraphs_from_path(file.path())
        .unwrap()
        .map(|p| p.unwrap())
        .collect();

    // Page 1 has three hOCR paragraphs, the middle one below threshold
    assert_eq!(paragraphs.len(), 4);

    assert_eq!(paragraphs[0].text, "It was a dark and ");
    assert_eq!(paragraphs[0].paragraph.lines.len(), 2);
    assert_eq!(paragraphs[0].paragraph.id.as_deref(), Some("par_1_1"));

    assert_eq!(paragraphs[1].text, "stormy night; ");
    assert_eq!(paragraphs[1].paragraph.lines.len(), 2);
    assert!(paragraphs[1].paragraph.id.is_none());
    assert_eq!(paragraphs[1].page_index, 0);
    assert_eq!(
        (paragraphs[1].page_width, paragraphs[1].page_height),
        (2480, 3508)
    );

    assert_eq!(paragraphs[2].text, "Café & Crème brûlée ");
    assert_eq!(paragraphs[2].page_index, 2);
    assert_eq!(paragraphs[3].text, "Fin. ");
}

#[test]
fn test_merged_words_match_text() {
    let file = write_temp(&sample_document());
    let filter = WordFilter::default();

    for reconstructed in paragraphs_from_path(file.path()).unwrap() {
        let reconstructed = reconstructed.unwrap();
        let joined: String = paragraph_words(&reconstructed.paragraph, &filter)
            .iter()
            .map(|w| format!("{} ", w.text))
            .collect();
        assert_eq!(joined, reconstructed.text);
    }
}

#[test]
fn test_trailing_low_confidence_paragraphs_dropped() {
    let doc = hocr(&[
        vec![vec![vec![("Kept", 90)]]],
        vec![vec![vec![("?", 10)]], vec![vec![("!", 20)]]],
    ]);
    let paragraphs: Vec<_> = Paragraphs::new(hocrtext::pages_from_reader(doc.as_bytes()))
        .map(|p| p.unwrap())
        .collect();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text, "Kept ");
}

#[test]
fn test_builder_paragraphs_use_threshold() {
    let file = write_temp(&sample_document());
    let paragraphs: Vec<_> = HocrText::new()
        .with_min_confidence(0.0)
        .paragraphs(file.path())
        .unwrap()
        .map(|p| p.unwrap())
        .collect();

    // Nothing is held back when every word passes
    assert_eq!(paragraphs.len(), 5);
    assert_eq!(paragraphs[1].text, "~~ ||| ");
}

#[test]
fn test_empty_document_has_no_paragraphs() {
    let file = write_temp(&hocr(&[]));
    assert_eq!(paragraphs_from_path(file.path()).unwrap().count(), 0);
}
