pub mod pdftotext;
pub mod table;

use crate::config::TableSettings;
use crate::error::BoxScoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BBox {
    pub fn center_x(&self) -> f32 {
        (self.x_min + self.x_max) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.y_min + self.y_max) / 2.0
    }
}

/// A single word with its position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub bbox: BBox,
}

/// Positioned words of a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub words: Vec<Word>,
}

/// A table grid as detected in the document. Empty cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Position in whole-document extraction order.
    pub index: usize,
    pub page_number: usize,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().filter_map(|c| c.as_deref()))
    }
}

/// What the engine needs from a document: first-page text and every table.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub first_page_text: String,
    pub tables: Vec<RawTable>,
}

/// Trait for PDF table extraction backends.
pub trait TableExtractor: Send + Sync {
    /// Extract the first-page text and all tables, page by page.
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractedDocument, BoxScoreError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Build the document view from positioned words.
///
/// Tables are numbered across the whole document, pages in order and
/// top-to-bottom within a page.
pub fn document_from_pages(
    pages: &[PageContent],
    settings: &TableSettings,
) -> Result<ExtractedDocument, BoxScoreError> {
    let first = pages
        .first()
        .ok_or_else(|| BoxScoreError::Document("document has no pages".into()))?;

    let first_page_text = table::page_text(&first.words, settings.row_tolerance);
    if first_page_text.trim().is_empty() {
        return Err(BoxScoreError::Document(
            "no extractable text on the first page".into(),
        ));
    }

    let mut tables = Vec::new();
    for page in pages {
        for rows in table::detect_tables(&page.words, settings) {
            tables.push(RawTable {
                index: tables.len(),
                page_number: page.page_number,
                rows,
            });
        }
    }

    Ok(ExtractedDocument {
        first_page_text,
        tables,
    })
}
