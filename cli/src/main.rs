//! hocrtext CLI - hOCR text and page offset extraction tool

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use hocrtext::{paragraph_words, ExtractOptions, HocrText, LookupTable, MIN_WORD_CONFIDENCE};

#[derive(Parser)]
#[command(name = "hocrtext")]
#[command(version)]
#[command(about = "Extract plain text and XML/plaintext page offsets from hOCR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the plain text of an hOCR file
    Text {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Minimum word confidence (0-100)
        #[arg(long, default_value_t = MIN_WORD_CONFIDENCE, env = "HOCRTEXT_MIN_CONFIDENCE")]
        min_confidence: f32,
    },

    /// Write reconstructed paragraphs as JSON lines
    #[command(alias = "par")]
    Paragraphs {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Minimum word confidence (0-100)
        #[arg(long, default_value_t = MIN_WORD_CONFIDENCE, env = "HOCRTEXT_MIN_CONFIDENCE")]
        min_confidence: f32,
    },

    /// Write the XML/plaintext page lookup table as JSON
    Lookup {
        /// Input hOCR files, processed in parallel
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output compact JSON, one file per line
        #[arg(long)]
        compact: bool,

        /// Minimum word confidence (0-100)
        #[arg(long, default_value_t = MIN_WORD_CONFIDENCE, env = "HOCRTEXT_MIN_CONFIDENCE")]
        min_confidence: f32,
    },

    /// Show document information
    Info {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text {
            input,
            output,
            min_confidence,
        } => cmd_text(&input, output.as_deref(), min_confidence),
        Commands::Paragraphs {
            input,
            output,
            min_confidence,
        } => cmd_paragraphs(&input, output.as_deref(), min_confidence),
        Commands::Lookup {
            inputs,
            compact,
            min_confidence,
        } => cmd_lookup(&inputs, compact, min_confidence),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extractor(min_confidence: f32) -> HocrText {
    HocrText::new().with_min_confidence(min_confidence)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        std::io::stdout().write_all(content.as_bytes())?;
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    min_confidence: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = extractor(min_confidence).text(input)?;
    write_output(output, &text)
}

/// One reconstructed paragraph in the JSON lines output.
#[derive(Serialize)]
struct ParagraphRecord<'a> {
    page_index: usize,
    page_width: u32,
    page_height: u32,
    text: &'a str,
    lines: usize,
    words: usize,
}

fn cmd_paragraphs(
    input: &Path,
    output: Option<&Path>,
    min_confidence: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = extractor(min_confidence);
    let filter = extractor.options().word_filter();

    let mut out = String::new();
    for reconstructed in extractor.paragraphs(input)? {
        let reconstructed = reconstructed?;
        let record = ParagraphRecord {
            page_index: reconstructed.page_index,
            page_width: reconstructed.page_width,
            page_height: reconstructed.page_height,
            text: &reconstructed.text,
            lines: reconstructed.paragraph.lines.len(),
            words: paragraph_words(&reconstructed.paragraph, &filter).len(),
        };
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }

    write_output(output, &out)
}

/// Lookup table of one input file.
#[derive(Serialize)]
struct LookupRecord {
    file: PathBuf,
    pages: usize,
    #[serde(flatten)]
    table: LookupTable,
}

/// Build lookup tables for several files in parallel; order follows `inputs`.
fn build_lookup_records(
    inputs: &[PathBuf],
    options: &ExtractOptions,
) -> Vec<(PathBuf, hocrtext::Result<LookupRecord>)> {
    inputs
        .par_iter()
        .map(|input| {
            let record = LookupTable::from_path_with_options(input, options).map(|table| {
                LookupRecord {
                    file: input.clone(),
                    pages: table.len(),
                    table,
                }
            });
            (input.clone(), record)
        })
        .collect()
}

fn cmd_lookup(
    inputs: &[PathBuf],
    compact: bool,
    min_confidence: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_min_confidence(min_confidence);
    let mut failed = 0;

    for (input, record) in build_lookup_records(inputs, &options) {
        match record {
            Ok(record) => {
                let json = if compact {
                    serde_json::to_string(&record)?
                } else {
                    serde_json::to_string_pretty(&record)?
                };
                println!("{}", json);
            }
            Err(e) => {
                log::error!("Lookup failed for {}: {}", input.display(), e);
                eprintln!("{} {}: {}", "Failed".red(), input.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = HocrText::new();
    let filter = extractor.options().word_filter();

    let mut pages = 0;
    let mut paragraphs = 0;
    let mut words = 0;
    let mut kept_words = 0;
    let mut text_bytes = 0;
    let mut dimensions = None;

    for page in extractor.pages(input)? {
        let page = page?;
        pages += 1;
        dimensions.get_or_insert(page.dimensions());
        paragraphs += page.paragraphs.len();
        for paragraph in &page.paragraphs {
            words += paragraph.word_count();
            kept_words += paragraph_words(paragraph, &filter).len();
        }
        text_bytes += hocrtext::page_text(&page, &filter).len();
    }

    let table = extractor.lookup_table(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), pages);
    if let Some((width, height)) = dimensions {
        println!("{}: {} x {}", "First page".bold(), width, height);
    }
    if let Some(last) = table.xml_offsets().last() {
        println!("{}: {} bytes", "Page markup".bold(), last.end);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), paragraphs);
    println!(
        "{}: {} ({} at confidence >= {})",
        "Words".bold(),
        words,
        kept_words,
        filter.min_confidence()
    );
    println!("{}: {}", "Text bytes".bold(), text_bytes);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "hocrtext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("hOCR text and page offset extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const DOC: &str = r#"<html><body><div class="ocr_page" title="bbox 0 0 10 10"><p class="ocr_par"><span class="ocr_line"><span class="ocrx_word" title="x_wconf 90">hi</span></span></p></div></body></html>"#;

    #[test]
    fn test_build_lookup_records_keeps_order_and_errors() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(DOC.as_bytes()).unwrap();
        let missing = PathBuf::from("/nonexistent/hocr.html");

        let inputs = vec![good.path().to_path_buf(), missing.clone()];
        let records = build_lookup_records(&inputs, &ExtractOptions::default());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, inputs[0]);
        let record = records[0].1.as_ref().unwrap();
        assert_eq!(record.pages, 1);
        assert_eq!(records[1].0, missing);
        assert!(records[1].1.is_err());
    }

    #[test]
    fn test_lookup_record_json() {
        let table = LookupTable::build(
            vec![hocrtext::PageOffset::new(12, 80)],
            vec![hocrtext::PageOffset::new(0, 4)],
        )
        .unwrap();
        let record = LookupRecord {
            file: PathBuf::from("a.html"),
            pages: 1,
            table,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"file":"a.html","pages":1,"xml":[{"start":12,"end":80}],"text":[{"start":0,"end":4}]}"#
        );
    }
}
