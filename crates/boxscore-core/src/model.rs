use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const UNKNOWN_OPPONENT: &str = "Unknown Opponent";
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// Game metadata read from the first page of a box-score report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    pub date: NaiveDate,
    pub primary_team: String,
    pub opponent_team: String,
    pub primary_score: u32,
    pub opponent_score: u32,
    pub venue: String,
    /// `{date}_{TEAM}_vs_{OPP}`, stable for identical documents.
    pub game_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Primary,
    Opponent,
}

impl Side {
    /// Stat tables alternate between the two teams in document order.
    pub fn for_table(ordinal: usize) -> Side {
        if ordinal % 2 == 0 {
            Side::Primary
        } else {
            Side::Opponent
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Primary => write!(f, "primary"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// A "made/attempted" compound cell such as `7/12`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MadeAttempted {
    pub made: u32,
    pub attempted: u32,
}

impl fmt::Display for MadeAttempted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.made, self.attempted)
    }
}

/// One player's line from a box-score table, flattened for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub record_id: String,
    pub game_id: String,
    pub game_date: NaiveDate,
    /// Caller-supplied grouping tag, copied verbatim.
    pub group_id: String,
    pub team: String,
    pub opponent: String,
    pub is_home_player: bool,
    pub name: String,
    pub number: String,
    pub minutes_played: String,

    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub field_goal_percent: Decimal,
    pub two_pt_made: u32,
    pub two_pt_attempted: u32,
    pub two_pt_percent: Decimal,
    pub three_pt_made: u32,
    pub three_pt_attempted: u32,
    pub three_pt_percent: Decimal,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub free_throw_percent: Decimal,

    pub rebounds_offensive: u32,
    pub rebounds_defensive: u32,
    pub rebounds_total: u32,
    pub assists: u32,
    pub turnovers: u32,
    pub steals: u32,
    pub blocks: u32,
    pub personal_fouls: u32,
    pub fouls_drawn: u32,
    pub plus_minus: i32,
    pub points: u32,

    pub effective_fg_percent: Decimal,
    pub true_shooting_percent: Decimal,
    pub assist_turnover_ratio: Decimal,

    pub created_at: DateTime<Utc>,
}

/// Why a table or a row was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooFewRows { rows: usize },
    NoMinutesColumn,
    DidNotPlay,
    EmptyName,
    FooterRow { marker: String },
    Malformed { detail: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewRows { rows } => {
                write!(f, "table has {rows} row(s), a two-row header needs at least 2")
            }
            SkipReason::NoMinutesColumn => write!(f, "no 'Min' column in the flattened header"),
            SkipReason::DidNotPlay => write!(f, "player did not play"),
            SkipReason::EmptyName => write!(f, "row has no player name"),
            SkipReason::FooterRow { marker } => write!(f, "footer row ({marker})"),
            SkipReason::Malformed { detail } => write!(f, "malformed row: {detail}"),
        }
    }
}

/// A table (when `row_index` is None) or a single row that was omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub table_index: usize,
    pub page_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub game: GameContext,
    pub players: Vec<PlayerRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
}

impl ParseResult {
    /// Top `n` players by points across both teams. Ties keep extraction order.
    pub fn top_scorers(&self, n: usize) -> Vec<&PlayerRecord> {
        let mut ranked: Vec<&PlayerRecord> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked.truncate(n);
        ranked
    }

    pub fn players_for(&self, side: Side) -> impl Iterator<Item = &PlayerRecord> {
        let home = side == Side::Primary;
        self.players.iter().filter(move |p| p.is_home_player == home)
    }
}
