//! Derived shooting-efficiency metrics.
//!
//! Computed in f64 and rounded to two decimals. A zero denominator yields 0.

use crate::model::MadeAttempted;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// eFG% = (FGM + 0.5 × 3PM) / FGA × 100.
pub fn effective_fg_pct(field_goals: MadeAttempted, threes: MadeAttempted) -> Decimal {
    let made = f64::from(field_goals.made) + 0.5 * f64::from(threes.made);
    bounded_pct(made, f64::from(field_goals.attempted))
}

/// TS% = PTS / (2 × (FGA + 0.44 × FTA)) × 100.
pub fn true_shooting_pct(
    points: u32,
    field_goals: MadeAttempted,
    free_throws: MadeAttempted,
) -> Decimal {
    let denominator =
        2.0 * (f64::from(field_goals.attempted) + 0.44 * f64::from(free_throws.attempted));
    bounded_pct(f64::from(points), denominator)
}

pub fn assist_turnover_ratio(assists: u32, turnovers: u32) -> Decimal {
    if turnovers == 0 {
        return Decimal::ZERO;
    }
    round(f64::from(assists) / f64::from(turnovers), 2)
}

/// `numerator / denominator × 100` rounded to `dp` decimals, not clamped.
pub fn ratio_pct(numerator: f64, denominator: f64, dp: u32) -> Decimal {
    if denominator <= 0.0 {
        return Decimal::ZERO;
    }
    round(numerator / denominator * 100.0, dp)
}

/// Player percentages are kept inside [0, 100].
fn bounded_pct(numerator: f64, denominator: f64) -> Decimal {
    if denominator <= 0.0 {
        return Decimal::ZERO;
    }
    round((numerator / denominator * 100.0).clamp(0.0, 100.0), 2)
}

fn round(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(dp))
        .unwrap_or(Decimal::ZERO)
}
