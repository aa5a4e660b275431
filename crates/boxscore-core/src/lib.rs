pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod summary;

use config::ParseOptions;
use error::BoxScoreError;
use extraction::TableExtractor;
use model::ParseResult;
use tracing::debug;

/// Main API entry point: parse a box-score PDF into game context and players.
///
/// `group_id` is an opaque tag copied onto every player record. The call keeps
/// no state between invocations; identical bytes give identical `game_id` and
/// `record_id` values.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TableExtractor,
    group_id: &str,
    options: &ParseOptions,
) -> Result<ParseResult, BoxScoreError> {
    let document = extractor.extract(pdf_bytes)?;
    debug!(
        backend = extractor.backend_name(),
        tables = document.tables.len(),
        "document extracted"
    );

    parsing::parse_document(&document, group_id, options)
}
