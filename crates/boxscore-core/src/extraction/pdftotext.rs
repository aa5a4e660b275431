use crate::config::TableSettings;
use crate::error::BoxScoreError;
use crate::extraction::{
    document_from_pages, BBox, ExtractedDocument, PageContent, TableExtractor, Word,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout` to get every word with its bounding box, then
/// rebuilds tables from word positions.
pub struct PdftotextExtractor {
    binary: PathBuf,
    settings: TableSettings,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_settings(TableSettings::default())
    }

    pub fn with_settings(settings: TableSettings) -> Self {
        PdftotextExtractor {
            binary: PathBuf::from("pdftotext"),
            settings,
        }
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for PdftotextExtractor {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractedDocument, BoxScoreError> {
        if pdf_bytes.is_empty() {
            return Err(BoxScoreError::Document("empty input".into()));
        }

        // The temp file is removed when it goes out of scope, on every path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| BoxScoreError::Document(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .and_then(|_| tmpfile.flush())
            .map_err(|e| BoxScoreError::Document(e.to_string()))?;

        let output = Command::new(&self.binary)
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BoxScoreError::PdftotextNotFound
                } else {
                    BoxScoreError::Document(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(BoxScoreError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml)?;
        debug!(
            pages = pages.len(),
            words = pages.iter().map(|p| p.words.len()).sum::<usize>(),
            "pdftotext word boxes parsed"
        );

        document_from_pages(&pages, &self.settings)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox-layout` XHTML into pages of positioned words.
fn parse_bbox_xml(xml: &str) -> Result<Vec<PageContent>, BoxScoreError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<PageContent> = Vec::new();
    let mut current_word: Option<(BBox, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"page" => pages.push(PageContent {
                    page_number: pages.len() + 1,
                    words: Vec::new(),
                }),
                b"word" => current_word = Some((parse_bbox(&e)?, String::new())),
                _ => {}
            },
            // A page without any text is written as an empty element.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"page" => pages.push(PageContent {
                page_number: pages.len() + 1,
                words: Vec::new(),
            }),
            Ok(Event::Text(t)) => {
                if let Some((_, text)) = current_word.as_mut() {
                    let decoded = t
                        .unescape()
                        .map(|s| s.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                    text.push_str(&decoded);
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"word" => {
                if let Some((bbox, text)) = current_word.take() {
                    let text = text.trim().to_string();
                    match pages.last_mut() {
                        Some(page) if !text.is_empty() => page.words.push(Word { text, bbox }),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(BoxScoreError::Document(format!(
                    "malformed pdftotext output at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(pages)
}

fn parse_bbox(word_tag: &BytesStart<'_>) -> Result<BBox, BoxScoreError> {
    Ok(BBox {
        x_min: parse_attr_f32(word_tag, "xMin")?,
        y_min: parse_attr_f32(word_tag, "yMin")?,
        x_max: parse_attr_f32(word_tag, "xMax")?,
        y_max: parse_attr_f32(word_tag, "yMax")?,
    })
}

fn parse_attr_f32(tag: &BytesStart<'_>, name: &str) -> Result<f32, BoxScoreError> {
    let attr = tag
        .try_get_attribute(name)
        .map_err(|e| BoxScoreError::Document(format!("bad attribute '{name}': {e}")))?
        .ok_or_else(|| BoxScoreError::Document(format!("word box without '{name}'")))?;
    let value = attr
        .unescape_value()
        .map_err(|e| BoxScoreError::Document(format!("bad attribute '{name}': {e}")))?;
    value
        .trim()
        .parse()
        .map_err(|_| BoxScoreError::Document(format!("'{name}' is not a number: {value}")))
}
