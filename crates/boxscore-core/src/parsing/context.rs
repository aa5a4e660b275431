use crate::model::{GameContext, UNKNOWN_OPPONENT, UNKNOWN_TEAM, UNKNOWN_VENUE};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `<TeamA> <scoreA> - <scoreB> <TeamB>` at the start of a line.
static SCORE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(.*)\s(\d+)\s[–-]\s(\d+)\s(.*)$").expect("valid score line regex")
});

/// `10 March 2024`, `3 Mar 2024`.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})\s+(\p{L}+)\.?\s+(\d{4})\b").expect("valid date regex")
});

/// `<venue> - Court 1`.
static VENUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(.+?)\s+[–-]\s+Court\b").expect("valid venue regex")
});

/// Derive game metadata from the first page of a report.
///
/// Never fails: anything that cannot be found falls back to a fixed
/// placeholder so the same text always yields the same context.
pub fn resolve_game_context(text: &str) -> GameContext {
    let (primary_team, primary_score, opponent_score, opponent_team) = match SCORE_LINE_RE
        .captures(text)
    {
        Some(caps) => (
            caps[1].trim().to_string(),
            caps[2].parse().unwrap_or(0),
            caps[3].parse().unwrap_or(0),
            caps[4].trim().to_string(),
        ),
        None => (UNKNOWN_TEAM.to_string(), 0, 0, UNKNOWN_OPPONENT.to_string()),
    };

    let date = parse_game_date(text).unwrap_or_default();

    let venue = VENUE_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN_VENUE.to_string());

    let game_id = build_game_id(date, &primary_team, &opponent_team);

    GameContext {
        date,
        primary_team,
        opponent_team,
        primary_score,
        opponent_score,
        venue,
        game_id,
    }
}

/// First `<day> <month name> <year>` that is a real calendar date.
///
/// `%B` accepts both full and abbreviated month names.
fn parse_game_date(text: &str) -> Option<NaiveDate> {
    DATE_RE.captures_iter(text).find_map(|caps| {
        let candidate = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
        NaiveDate::parse_from_str(&candidate, "%d %B %Y").ok()
    })
}

pub fn build_game_id(date: NaiveDate, primary_team: &str, opponent_team: &str) -> String {
    format!(
        "{}_{}_vs_{}",
        date.format("%Y-%m-%d"),
        abbreviate(primary_team),
        abbreviate(opponent_team)
    )
}

fn abbreviate(team: &str) -> String {
    team.chars().take(3).collect::<String>().to_uppercase()
}
