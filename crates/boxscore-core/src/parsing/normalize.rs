use crate::config::ParseOptions;
use crate::model::{GameContext, PlayerRecord, Side, SkipReason};
use crate::parsing::fields::StatField;
use crate::parsing::header::{DataRow, ResolvedTable};
use crate::parsing::metrics;
use crate::parsing::values::{
    is_blank, jersey_digits, parse_count, parse_made_attempted, parse_percent, parse_signed,
};
use chrono::{DateTime, Utc};

/// Everything a row needs besides its own cells.
#[derive(Debug, Clone)]
pub struct RowContext<'a> {
    pub game: &'a GameContext,
    pub side: Side,
    pub team: &'a str,
    pub opponent: &'a str,
    pub group_id: &'a str,
    pub created_at: DateTime<Utc>,
    pub options: &'a ParseOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Parsed(Box<PlayerRecord>),
    Skipped(SkipReason),
}

/// First non-empty value among the aliases of `field`.
fn lookup<'r>(table: &ResolvedTable, row: &'r DataRow, field: StatField) -> Option<&'r str> {
    field
        .aliases()
        .iter()
        .find_map(|alias| table.cell(row, alias).filter(|v| !is_blank(v)))
}

/// Convert one data row into a player record.
///
/// Numeric cells never fail: anything missing or unreadable counts as 0.
/// Footer rows, nameless rows and misaligned rows are skipped.
pub fn normalize_row(table: &ResolvedTable, row: &DataRow, ctx: &RowContext<'_>) -> RowOutcome {
    if row.cells.len() != table.header.len() {
        return RowOutcome::Skipped(SkipReason::Malformed {
            detail: format!(
                "{} cell(s) under a {}-column header",
                row.cells.len(),
                table.header.len()
            ),
        });
    }

    let name = lookup(table, row, StatField::Name).unwrap_or("").trim();
    if name.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyName);
    }

    let jersey = lookup(table, row, StatField::Number).unwrap_or("");
    if let Some(marker) = ctx
        .options
        .footer_markers
        .iter()
        .find(|m| jersey.contains(m.as_str()))
    {
        return RowOutcome::Skipped(SkipReason::FooterRow {
            marker: marker.clone(),
        });
    }

    let get = |field| lookup(table, row, field);

    let field_goals = parse_made_attempted(get(StatField::FieldGoals));
    let two_points = parse_made_attempted(get(StatField::TwoPoints));
    let three_points = parse_made_attempted(get(StatField::ThreePoints));
    let free_throws = parse_made_attempted(get(StatField::FreeThrows));
    let points = parse_count(get(StatField::Points));
    let assists = parse_count(get(StatField::Assists));
    let turnovers = parse_count(get(StatField::Turnovers));

    let record = PlayerRecord {
        record_id: format!("{}_{}", ctx.game.game_id, name.replace(' ', "_")),
        game_id: ctx.game.game_id.clone(),
        game_date: ctx.game.date,
        group_id: ctx.group_id.to_string(),
        team: ctx.team.to_string(),
        opponent: ctx.opponent.to_string(),
        is_home_player: ctx.side == Side::Primary,
        name: name.to_string(),
        number: jersey_digits(jersey),
        minutes_played: get(StatField::Minutes).unwrap_or("").trim().to_string(),

        field_goals_made: field_goals.made,
        field_goals_attempted: field_goals.attempted,
        field_goal_percent: parse_percent(get(StatField::FieldGoalPct)),
        two_pt_made: two_points.made,
        two_pt_attempted: two_points.attempted,
        two_pt_percent: parse_percent(get(StatField::TwoPointPct)),
        three_pt_made: three_points.made,
        three_pt_attempted: three_points.attempted,
        three_pt_percent: parse_percent(get(StatField::ThreePointPct)),
        free_throws_made: free_throws.made,
        free_throws_attempted: free_throws.attempted,
        free_throw_percent: parse_percent(get(StatField::FreeThrowPct)),

        rebounds_offensive: parse_count(get(StatField::OffensiveRebounds)),
        rebounds_defensive: parse_count(get(StatField::DefensiveRebounds)),
        rebounds_total: parse_count(get(StatField::TotalRebounds)),
        assists,
        turnovers,
        steals: parse_count(get(StatField::Steals)),
        blocks: parse_count(get(StatField::Blocks)),
        personal_fouls: parse_count(get(StatField::PersonalFouls)),
        fouls_drawn: parse_count(get(StatField::FoulsDrawn)),
        plus_minus: parse_signed(get(StatField::PlusMinus)),
        points,

        effective_fg_percent: metrics::effective_fg_pct(field_goals, three_points),
        true_shooting_percent: metrics::true_shooting_pct(points, field_goals, free_throws),
        assist_turnover_ratio: metrics::assist_turnover_ratio(assists, turnovers),

        created_at: ctx.created_at,
    };

    RowOutcome::Parsed(Box::new(record))
}
