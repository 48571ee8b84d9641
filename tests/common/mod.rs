//! Shared hOCR fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A word as `(text, x_wconf)`.
pub type FixtureWord<'a> = (&'a str, u32);

/// Render a Tesseract-style hOCR document.
///
/// `pages[p][par][line]` is the list of words of one line.
pub fn hocr(pages: &[Vec<Vec<Vec<FixtureWord<'_>>>>]) -> String {
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
 <head>
  <title></title>
  <meta http-equiv="Content-Type" content="text/html;charset=utf-8"/>
  <meta name='ocr-system' content='tesseract 5.3.0' />
 </head>
 <body>
"#,
    );

    for (p, paragraphs) in pages.iter().enumerate() {
        out.push_str(&format!(
            "  <div class='ocr_page' id='page_{0}' title='image \"page_{0}.png\"; bbox 0 0 2480 3508; ppageno {1}'>\n",
            p + 1,
            p
        ));
        out.push_str(&format!(
            "   <div class='ocr_carea' id='block_{}_1' title=\"bbox 100 100 2300 3300\">\n",
            p + 1
        ));
        for (par, lines) in paragraphs.iter().enumerate() {
            out.push_str(&format!(
                "    <p class='ocr_par' id='par_{}_{}' lang='eng' title=\"bbox 100 100 2300 400\">\n",
                p + 1,
                par + 1
            ));
            for (l, words) in lines.iter().enumerate() {
                out.push_str(&format!(
                    "     <span class='ocr_line' id='line_{}_{}_{}' title=\"bbox 100 100 2300 150; baseline 0 -10\">",
                    p + 1,
                    par + 1,
                    l + 1
                ));
                for (w, (text, conf)) in words.iter().enumerate() {
                    out.push_str(&format!(
                        "\n      <span class='ocrx_word' id='word_{}_{}_{}_{}' title='bbox {} 100 {} 150; x_wconf {}'>{}</span>",
                        p + 1,
                        par + 1,
                        l + 1,
                        w + 1,
                        100 + w * 200,
                        250 + w * 200,
                        conf,
                        text
                    ));
                }
                out.push_str("\n     </span>\n");
            }
            out.push_str("    </p>\n");
        }
        out.push_str("   </div>\n  </div>\n");
    }

    out.push_str(" </body>\n</html>\n");
    out
}

/// Three pages with a low-confidence paragraph, an empty page, and
/// non-ASCII text.
pub fn sample_document() -> String {
    hocr(&[
        vec![
            vec![
                vec![("It", 96), ("was", 95), ("a", 91)],
                vec![("dark", 89), ("and", 93)],
            ],
            vec![vec![("~~", 12), ("|||", 40)]],
            vec![vec![("stormy", 88), ("night;", 75), ("blur", 74)]],
        ],
        vec![],
        vec![
            vec![vec![("Café", 90), ("&amp;", 92), ("Crème", 93), ("brûlée", 90)]],
            vec![vec![("Fin.", 99)]],
        ],
    ])
}

pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
