use crate::model::MadeAttempted;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Whether a cell carries no value: empty, whitespace, or a dash placeholder.
pub fn is_blank(s: &str) -> bool {
    matches!(s.trim(), "" | "-" | "—" | "–")
}

/// Parse an integer cell, defaulting to 0.
///
/// Handles formats like:
/// - "12" -> 12
/// - "+5" -> 5, "-3" / "−3" -> -3 (plus/minus column)
/// - "4.0" -> 4
/// - "", "-", "abc", "4.5" -> 0
pub fn parse_signed(cell: Option<&str>) -> i32 {
    let Some(raw) = cell.filter(|s| !is_blank(s)) else {
        return 0;
    };
    let s = raw.trim().replace('−', "-");
    if let Ok(v) = s.parse::<i32>() {
        return v;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => f as i32,
        _ => 0,
    }
}

/// Parse a non-negative count, defaulting to 0 (negative values included).
pub fn parse_count(cell: Option<&str>) -> u32 {
    u32::try_from(parse_signed(cell)).unwrap_or(0)
}

/// Parse a percentage cell such as "58.3", "58.3%" or "58,3", defaulting to 0.
pub fn parse_percent(cell: Option<&str>) -> Decimal {
    let Some(raw) = cell.filter(|s| !is_blank(s)) else {
        return Decimal::ZERO;
    };
    let s = raw.trim().trim_end_matches('%').trim().replace(',', ".");
    Decimal::from_str(&s).unwrap_or(Decimal::ZERO)
}

/// Split a "made/attempted" cell, defaulting to 0/0 on anything malformed.
pub fn parse_made_attempted(cell: Option<&str>) -> MadeAttempted {
    let parsed = cell.and_then(|s| {
        let (made, attempted) = s.trim().split_once('/')?;
        Some(MadeAttempted {
            made: made.trim().parse().ok()?,
            attempted: attempted.trim().parse().ok()?,
        })
    });
    parsed.unwrap_or_default()
}

/// Keep only the digits of a jersey cell ("#07" -> "07").
pub fn jersey_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_values() {
        assert_eq!(parse_signed(Some("12")), 12);
        assert_eq!(parse_signed(Some(" +5 ")), 5);
        assert_eq!(parse_signed(Some("-3")), -3);
        assert_eq!(parse_signed(Some("−7")), -7);
        assert_eq!(parse_signed(Some("4.0")), 4);
    }

    #[test]
    fn test_signed_fallbacks() {
        assert_eq!(parse_signed(None), 0);
        assert_eq!(parse_signed(Some("")), 0);
        assert_eq!(parse_signed(Some("—")), 0);
        assert_eq!(parse_signed(Some("abc")), 0);
        assert_eq!(parse_signed(Some("4.5")), 0);
    }

    #[test]
    fn test_count_rejects_negative() {
        assert_eq!(parse_count(Some("9")), 9);
        assert_eq!(parse_count(Some("-2")), 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(parse_percent(Some("58.3")), dec!(58.3));
        assert_eq!(parse_percent(Some("58.3%")), dec!(58.3));
        assert_eq!(parse_percent(Some("58,3")), dec!(58.3));
        assert_eq!(parse_percent(Some("n/a")), Decimal::ZERO);
        assert_eq!(parse_percent(None), Decimal::ZERO);
    }

    #[test]
    fn test_made_attempted() {
        assert_eq!(
            parse_made_attempted(Some("7/12")),
            MadeAttempted {
                made: 7,
                attempted: 12
            }
        );
        assert_eq!(
            parse_made_attempted(Some(" 0 / 3 ")),
            MadeAttempted {
                made: 0,
                attempted: 3
            }
        );
    }

    #[test]
    fn test_made_attempted_malformed() {
        for bad in ["", "7", "7/", "/12", "a/b", "7/12/3", "-1/2"] {
            assert_eq!(
                parse_made_attempted(Some(bad)),
                MadeAttempted::default(),
                "{bad}"
            );
        }
        assert_eq!(parse_made_attempted(None), MadeAttempted::default());
    }

    #[test]
    fn test_jersey_digits() {
        assert_eq!(jersey_digits("#07"), "07");
        assert_eq!(jersey_digits("Totals"), "");
    }
}
