use crate::error::BoxScoreError;
use crate::extraction::RawTable;
use crate::model::{GameContext, Side};
use crate::parsing::fields::StatField;
use tracing::debug;

/// Header tokens found in box-score tables and nowhere else on the report.
pub const ANCHOR_TOKENS: [&str; 8] = [
    "Min",
    "PTS",
    "Field Goals",
    "Rebounds",
    "AS",
    "TO",
    "ST",
    "BS",
];

/// A stat table with the team it belongs to.
#[derive(Debug, Clone)]
pub struct ClassifiedTable<'a> {
    pub table: &'a RawTable,
    pub side: Side,
    pub team: &'a str,
    pub opponent: &'a str,
}

/// Whether a table looks like a box score: enough rows, an anchor token and a
/// minutes-played cell.
pub fn is_stat_table(table: &RawTable, min_rows: usize) -> bool {
    table.rows.len() >= min_rows
        && table
            .cells()
            .any(|cell| ANCHOR_TOKENS.iter().any(|token| cell.contains(token)))
        && table.cells().any(is_minutes_label)
}

fn is_minutes_label(cell: &str) -> bool {
    let cell = cell.trim();
    StatField::Minutes.aliases().iter().any(|alias| *alias == cell)
}

/// Keep the box-score tables and assign them to teams.
///
/// Sides alternate over the qualifying tables in whole-document order, so the
/// first box score is the primary team's, the second the opponent's, and so on.
pub fn classify_tables<'a>(
    tables: &'a [RawTable],
    game: &'a GameContext,
    min_rows: usize,
) -> Result<Vec<ClassifiedTable<'a>>, BoxScoreError> {
    let mut classified = Vec::new();

    for table in tables {
        if !is_stat_table(table, min_rows) {
            debug!(
                table = table.index,
                page = table.page_number,
                rows = table.rows.len(),
                "not a box-score table"
            );
            continue;
        }

        let side = Side::for_table(classified.len());
        let (team, opponent) = match side {
            Side::Primary => (game.primary_team.as_str(), game.opponent_team.as_str()),
            Side::Opponent => (game.opponent_team.as_str(), game.primary_team.as_str()),
        };
        debug!(table = table.index, page = table.page_number, %side, "box-score table");
        classified.push(ClassifiedTable {
            table,
            side,
            team,
            opponent,
        });
    }

    if classified.is_empty() {
        return Err(BoxScoreError::NoStatTable);
    }
    Ok(classified)
}
