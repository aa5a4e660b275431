use boxscore_core::extraction::RawTable;
use boxscore_core::model::{MadeAttempted, ParseResult, PlayerRecord, Side};
use std::fmt::Write;

pub fn format_parsed(parsed: &ParseResult) -> String {
    let mut out = String::new();
    let game = &parsed.game;

    writeln!(
        out,
        "{} {} - {} {}",
        game.primary_team, game.primary_score, game.opponent_score, game.opponent_team
    )
    .ok();
    writeln!(out, "Date: {}  Venue: {}", game.date, game.venue).ok();
    writeln!(out, "Game ID: {}", game.game_id).ok();

    for side in [Side::Primary, Side::Opponent] {
        let players: Vec<&PlayerRecord> = parsed.players_for(side).collect();
        if players.is_empty() {
            continue;
        }
        let team = match side {
            Side::Primary => &game.primary_team,
            Side::Opponent => &game.opponent_team,
        };
        writeln!(out).ok();
        writeln!(out, "=== {team} ({side}) ===").ok();

        let max_name = players
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        writeln!(
            out,
            "  {:>3}  {:<width$}  {:>5}  {:>5}  {:>5}  {:>5}  {:>3}  {:>3}  {:>3}  {:>4}  {:>6}  {:>6}",
            "No",
            "Name",
            "Min",
            "FG",
            "3P",
            "FT",
            "REB",
            "AS",
            "TO",
            "PTS",
            "eFG%",
            "TS%",
            width = max_name
        )
        .ok();

        for p in &players {
            writeln!(
                out,
                "  {:>3}  {:<width$}  {:>5}  {:>5}  {:>5}  {:>5}  {:>3}  {:>3}  {:>3}  {:>4}  {:>6}  {:>6}",
                p.number,
                p.name,
                p.minutes_played,
                shots(p.field_goals_made, p.field_goals_attempted),
                shots(p.three_pt_made, p.three_pt_attempted),
                shots(p.free_throws_made, p.free_throws_attempted),
                p.rebounds_total,
                p.assists,
                p.turnovers,
                p.points,
                p.effective_fg_percent.to_string(),
                p.true_shooting_percent.to_string(),
                width = max_name
            )
            .ok();
        }
    }

    if !parsed.skipped.is_empty() {
        writeln!(out).ok();
        writeln!(out, "Skipped:").ok();
        for item in &parsed.skipped {
            let written = match item.row_index {
                Some(row) => writeln!(
                    out,
                    "  table {} (page {}), row {}: {}",
                    item.table_index, item.page_number, row, item.reason
                ),
                None => writeln!(
                    out,
                    "  table {} (page {}): {}",
                    item.table_index, item.page_number, item.reason
                ),
            };
            written.ok();
        }
    }

    out.trim_end().to_string()
}

fn shots(made: u32, attempted: u32) -> String {
    MadeAttempted { made, attempted }.to_string()
}

pub fn format_tables(tables: &[RawTable]) -> String {
    if tables.is_empty() {
        return "No tables detected.".to_string();
    }

    let mut out = String::new();
    for table in tables {
        writeln!(
            out,
            "--- Table {} (page {}, {} rows) ---",
            table.index,
            table.page_number,
            table.rows.len()
        )
        .ok();
        for row in &table.rows {
            let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
            writeln!(out, "  {}", cells.join(" | ")).ok();
        }
        writeln!(out).ok();
    }
    out.trim_end().to_string()
}
