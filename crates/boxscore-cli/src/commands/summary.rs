use boxscore_core::config::ParseOptions;
use boxscore_core::error::BoxScoreError;
use boxscore_core::extraction::pdftotext::PdftotextExtractor;
use boxscore_core::summary::build_summary_input;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    group_id: &str,
    top: usize,
    options: &ParseOptions,
) -> Result<(), BoxScoreError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::with_settings(options.table.clone());
    let parsed = boxscore_core::parse_pdf(&pdf_bytes, &extractor, group_id, options)?;

    output::json::print(&build_summary_input(&parsed, top))
}
