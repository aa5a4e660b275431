pub mod classify;
pub mod context;
pub mod fields;
pub mod header;
pub mod metrics;
pub mod normalize;
pub mod values;

use crate::config::ParseOptions;
use crate::error::BoxScoreError;
use crate::extraction::ExtractedDocument;
use crate::model::{ParseResult, SkippedItem};
use chrono::Utc;
use classify::classify_tables;
use context::resolve_game_context;
use header::resolve_table;
use normalize::{normalize_row, RowContext, RowOutcome};
use tracing::{debug, info, warn};

/// Turn an extracted document into game context and player records.
///
/// Tables and rows that cannot be used are left out and listed in
/// `ParseResult::skipped`; only a document without any box-score table or
/// without a single usable player row is an error.
pub fn parse_document(
    document: &ExtractedDocument,
    group_id: &str,
    options: &ParseOptions,
) -> Result<ParseResult, BoxScoreError> {
    let game = resolve_game_context(&document.first_page_text);
    debug!(game_id = %game.game_id, venue = %game.venue, "game context resolved");

    let classified = classify_tables(&document.tables, &game, options.min_table_rows)?;
    let created_at = Utc::now();

    let mut players = Vec::new();
    let mut skipped = Vec::new();

    for entry in &classified {
        let table = entry.table;
        let resolved = match resolve_table(table, options) {
            Ok(resolved) => resolved,
            Err(reason) => {
                warn!(table = table.index, page = table.page_number, %reason, "skipping table");
                skipped.push(SkippedItem {
                    table_index: table.index,
                    page_number: table.page_number,
                    row_index: None,
                    reason,
                });
                continue;
            }
        };

        for (row_index, reason) in &resolved.dropped {
            debug!(table = table.index, row = row_index, %reason, "skipping row");
            skipped.push(SkippedItem {
                table_index: table.index,
                page_number: table.page_number,
                row_index: Some(*row_index),
                reason: reason.clone(),
            });
        }

        let ctx = RowContext {
            game: &game,
            side: entry.side,
            team: entry.team,
            opponent: entry.opponent,
            group_id,
            created_at,
            options,
        };

        for row in &resolved.rows {
            match normalize_row(&resolved, row, &ctx) {
                RowOutcome::Parsed(record) => players.push(*record),
                RowOutcome::Skipped(reason) => {
                    debug!(
                        table = table.index,
                        row = row.row_index,
                        cells = ?row.cells,
                        %reason,
                        "skipping row"
                    );
                    skipped.push(SkippedItem {
                        table_index: table.index,
                        page_number: table.page_number,
                        row_index: Some(row.row_index),
                        reason,
                    });
                }
            }
        }
    }

    if players.is_empty() {
        return Err(BoxScoreError::NoPlayersParsed);
    }

    info!(
        game_id = %game.game_id,
        tables = classified.len(),
        players = players.len(),
        skipped = skipped.len(),
        "parsed {} vs {}",
        game.primary_team,
        game.opponent_team
    );

    Ok(ParseResult {
        game,
        players,
        skipped,
    })
}
