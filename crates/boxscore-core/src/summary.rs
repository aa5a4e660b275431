//! Deterministic payload for the game-summary writer.
//!
//! Everything here is derived from a [`ParseResult`]; nothing is fetched or
//! generated.

use crate::model::{GameContext, ParseResult, PlayerRecord, Side};
use crate::parsing::metrics::ratio_pct;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorPair<T> {
    pub primary: T,
    pub opponent: T,
}

/// Team-level factors, primary team first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourFactors {
    pub effective_fg_pct: FactorPair<Decimal>,
    pub turnovers: FactorPair<u64>,
    pub rebounds: FactorPair<u64>,
    /// Free throws made per field-goal attempt, as a percentage.
    pub free_throw_rate: FactorPair<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPlayer {
    pub name: String,
    pub points: u32,
    pub rebounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryInput {
    pub game: GameContext,
    pub four_factors: FourFactors,
    pub key_players: FactorPair<Vec<KeyPlayer>>,
    /// Leading scorers of the game, both teams together.
    pub top_scorers: Vec<KeyPlayer>,
}

/// Per-side sums, widened so that any number of `u32` cells fits.
#[derive(Debug, Default, Clone, Copy)]
struct TeamTotals {
    fgm: u64,
    fga: u64,
    three_pm: u64,
    ftm: u64,
    turnovers: u64,
    rebounds: u64,
}

impl TeamTotals {
    fn of<'a>(players: impl Iterator<Item = &'a PlayerRecord>) -> Self {
        players.fold(TeamTotals::default(), |acc, p| TeamTotals {
            fgm: acc.fgm + u64::from(p.field_goals_made),
            fga: acc.fga + u64::from(p.field_goals_attempted),
            three_pm: acc.three_pm + u64::from(p.three_pt_made),
            ftm: acc.ftm + u64::from(p.free_throws_made),
            turnovers: acc.turnovers + u64::from(p.turnovers),
            rebounds: acc.rebounds + u64::from(p.rebounds_total),
        })
    }

    fn effective_fg_pct(&self) -> Decimal {
        let made = self.fgm as f64 + 0.5 * self.three_pm as f64;
        ratio_pct(made, self.fga as f64, 1)
    }

    fn free_throw_rate(&self) -> Decimal {
        ratio_pct(self.ftm as f64, self.fga as f64, 1)
    }
}

impl From<&PlayerRecord> for KeyPlayer {
    fn from(p: &PlayerRecord) -> Self {
        KeyPlayer {
            name: p.name.clone(),
            points: p.points,
            rebounds: p.rebounds_total,
        }
    }
}

fn key_players(result: &ParseResult, side: Side, top_n: usize) -> Vec<KeyPlayer> {
    let mut ranked: Vec<&PlayerRecord> = result.players_for(side).collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked.into_iter().take(top_n).map(KeyPlayer::from).collect()
}

/// Build the summary payload with the `top_n` leading scorers of each side
/// and of the whole game.
pub fn build_summary_input(result: &ParseResult, top_n: usize) -> SummaryInput {
    let primary = TeamTotals::of(result.players_for(Side::Primary));
    let opponent = TeamTotals::of(result.players_for(Side::Opponent));

    SummaryInput {
        game: result.game.clone(),
        four_factors: FourFactors {
            effective_fg_pct: FactorPair {
                primary: primary.effective_fg_pct(),
                opponent: opponent.effective_fg_pct(),
            },
            turnovers: FactorPair {
                primary: primary.turnovers,
                opponent: opponent.turnovers,
            },
            rebounds: FactorPair {
                primary: primary.rebounds,
                opponent: opponent.rebounds,
            },
            free_throw_rate: FactorPair {
                primary: primary.free_throw_rate(),
                opponent: opponent.free_throw_rate(),
            },
        },
        key_players: FactorPair {
            primary: key_players(result, Side::Primary, top_n),
            opponent: key_players(result, Side::Opponent, top_n),
        },
        top_scorers: result
            .top_scorers(top_n)
            .into_iter()
            .map(KeyPlayer::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::context::resolve_game_context;
    use chrono::DateTime;
    use rust_decimal_macros::dec;

    fn player(name: &str, home: bool, fg: (u32, u32), threes: u32, ftm: u32, pts: u32) -> PlayerRecord {
        PlayerRecord {
            record_id: name.into(),
            game_id: "g".into(),
            game_date: Default::default(),
            group_id: "grp".into(),
            team: String::new(),
            opponent: String::new(),
            is_home_player: home,
            name: name.into(),
            number: String::new(),
            minutes_played: "10:00".into(),
            field_goals_made: fg.0,
            field_goals_attempted: fg.1,
            field_goal_percent: Decimal::ZERO,
            two_pt_made: 0,
            two_pt_attempted: 0,
            two_pt_percent: Decimal::ZERO,
            three_pt_made: threes,
            three_pt_attempted: threes,
            three_pt_percent: Decimal::ZERO,
            free_throws_made: ftm,
            free_throws_attempted: ftm,
            free_throw_percent: Decimal::ZERO,
            rebounds_offensive: 0,
            rebounds_defensive: 2,
            rebounds_total: 2,
            assists: 0,
            turnovers: 1,
            steals: 0,
            blocks: 0,
            personal_fouls: 0,
            fouls_drawn: 0,
            plus_minus: 0,
            points: pts,
            effective_fg_percent: Decimal::ZERO,
            true_shooting_percent: Decimal::ZERO,
            assist_turnover_ratio: Decimal::ZERO,
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        }
    }

    fn result() -> ParseResult {
        ParseResult {
            game: resolve_game_context("Kings 82 - 75 Hawks"),
            players: vec![
                player("Ann", true, (7, 12), 2, 4, 20),
                player("Bea", true, (3, 18), 0, 1, 7),
                player("Cy", false, (5, 10), 1, 2, 13),
                player("Dee", true, (0, 0), 0, 0, 20),
            ],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_four_factors() {
        let summary = build_summary_input(&result(), 2);
        let factors = &summary.four_factors;
        // (10 + 1) / 30
        assert_eq!(factors.effective_fg_pct.primary, dec!(36.7));
        assert_eq!(factors.effective_fg_pct.opponent, dec!(55.0));
        assert_eq!(factors.turnovers, FactorPair { primary: 3, opponent: 1 });
        assert_eq!(factors.rebounds, FactorPair { primary: 6, opponent: 2 });
        assert_eq!(factors.free_throw_rate.primary, dec!(16.7));
        assert_eq!(factors.free_throw_rate.opponent, dec!(20.0));
    }

    #[test]
    fn test_key_players_per_side() {
        let summary = build_summary_input(&result(), 2);
        let names: Vec<&str> = summary
            .key_players
            .primary
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        // Tied on 20 points: extraction order decides.
        assert_eq!(names, vec!["Ann", "Dee"]);
        assert_eq!(summary.key_players.opponent.len(), 1);
        assert_eq!(summary.key_players.opponent[0].points, 13);
    }

    #[test]
    fn test_top_scorers_across_sides() {
        let result = result();
        let top: Vec<&str> = result
            .top_scorers(3)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(top, vec!["Ann", "Dee", "Cy"]);
    }

    #[test]
    fn test_summary_lists_game_top_scorers() {
        let summary = build_summary_input(&result(), 2);
        let top: Vec<(&str, u32)> = summary
            .top_scorers
            .iter()
            .map(|p| (p.name.as_str(), p.points))
            .collect();
        assert_eq!(top, vec![("Ann", 20), ("Dee", 20)]);
    }

    #[test]
    fn test_large_attempt_counts_do_not_overflow() {
        let result = ParseResult {
            game: resolve_game_context("Kings 82 - 75 Hawks"),
            players: vec![
                player("Ann", true, (4_000_000_000, 4_000_000_000), 0, 4_000_000_000, 0),
                player("Bea", true, (4_000_000_000, 4_000_000_000), 0, 4_000_000_000, 0),
            ],
            skipped: Vec::new(),
        };
        let factors = build_summary_input(&result, 1).four_factors;
        assert_eq!(factors.effective_fg_pct.primary, dec!(100.0));
        assert_eq!(factors.free_throw_rate.primary, dec!(100.0));
        assert_eq!(factors.turnovers.primary, 2);
    }

    #[test]
    fn test_empty_side() {
        let mut result = result();
        result.players.retain(|p| p.is_home_player);
        let summary = build_summary_input(&result, 5);
        assert_eq!(summary.four_factors.effective_fg_pct.opponent, Decimal::ZERO);
        assert!(summary.key_players.opponent.is_empty());
    }
}
