use boxscore_core::config::ParseOptions;
use boxscore_core::error::BoxScoreError;
use boxscore_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;
use tracing::debug;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    group_id: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
    options: &ParseOptions,
) -> Result<(), BoxScoreError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    debug!(file = %pdf_file.display(), bytes = pdf_bytes.len(), "read input");
    let extractor = PdftotextExtractor::with_settings(options.table.clone());
    let parsed = boxscore_core::parse_pdf(&pdf_bytes, &extractor, group_id, options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&parsed, &path)?;
            eprintln!(
                "Parsed {} player(s) for {}, written to {}",
                parsed.players.len(),
                parsed.game.game_id,
                path.display()
            );
            if !parsed.skipped.is_empty() {
                eprintln!("  {} table(s)/row(s) skipped", parsed.skipped.len());
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => println!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}
