/// Canonical box-score fields and the column names each may appear under.
///
/// Aliases are tried in order against the resolved header; the first column
/// holding a non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Number,
    Name,
    Minutes,
    FieldGoals,
    FieldGoalPct,
    TwoPoints,
    TwoPointPct,
    ThreePoints,
    ThreePointPct,
    FreeThrows,
    FreeThrowPct,
    OffensiveRebounds,
    DefensiveRebounds,
    TotalRebounds,
    Assists,
    Turnovers,
    Steals,
    Blocks,
    PersonalFouls,
    FoulsDrawn,
    PlusMinus,
    Points,
}

impl StatField {
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            StatField::Number => &["No", "No.", "#"],
            StatField::Name => &["Name", "name", "Player"],
            StatField::Minutes => &["Min", "MIN", "Mins"],
            StatField::FieldGoals => &["Field Goals M/A", "FG M/A", "FGM/A"],
            StatField::FieldGoalPct => &["Field Goals %", "Field Goals M/A %", "FG%"],
            StatField::TwoPoints => &["2 Points M/A", "2PT M/A"],
            StatField::TwoPointPct => &["2 Points %", "2PT%"],
            StatField::ThreePoints => &["3 Points M/A", "3PT M/A"],
            StatField::ThreePointPct => &["3 Points %", "3PT%"],
            StatField::FreeThrows => &["Free Throws M/A", "FT M/A"],
            StatField::FreeThrowPct => &["Free Throws %", "FT%"],
            StatField::OffensiveRebounds => &["Rebounds OR", "OR", "OREB"],
            StatField::DefensiveRebounds => &["Rebounds DR", "DR", "DREB"],
            StatField::TotalRebounds => &["Rebounds TOT", "TOT", "REB"],
            StatField::Assists => &["AS", "Assists", "AST"],
            StatField::Turnovers => &["TO", "Turnovers", "TOV"],
            StatField::Steals => &["ST", "Steals", "STL"],
            StatField::Blocks => &["BS", "Blocks", "BLK"],
            StatField::PersonalFouls => &["Fouls PF", "PF"],
            StatField::FoulsDrawn => &["Fouls FD", "FD"],
            StatField::PlusMinus => &["+/-", "Plus/Minus"],
            StatField::Points => &["PTS", "Points"],
        }
    }
}
