use boxscore_core::config::ParseOptions;
use boxscore_core::error::BoxScoreError;
use boxscore_core::extraction::pdftotext::PdftotextExtractor;
use boxscore_core::extraction::TableExtractor;
use std::path::PathBuf;
use tracing::debug;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    options: &ParseOptions,
) -> Result<(), BoxScoreError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    debug!(file = %pdf_file.display(), bytes = pdf_bytes.len(), "read input");
    let extractor = PdftotextExtractor::with_settings(options.table.clone());
    let document = extractor.extract(&pdf_bytes)?;

    match output_format {
        "json" => output::json::print(&document.tables)?,
        _ => println!("{}", output::table::format_tables(&document.tables)),
    }

    Ok(())
}
