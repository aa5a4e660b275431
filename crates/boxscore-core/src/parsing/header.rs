use crate::config::ParseOptions;
use crate::extraction::RawTable;
use crate::model::SkipReason;
use crate::parsing::fields::StatField;
use std::collections::{HashMap, HashSet};

/// Flattened, de-duplicated column names of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ResolvedHeader {
    pub fn new(names: Vec<String>) -> Self {
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        ResolvedHeader { names, positions }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of the first alias of `field` present in the header.
    pub fn field_position(&self, field: StatField) -> Option<usize> {
        field.aliases().iter().find_map(|alias| self.position(alias))
    }
}

/// A data row, keeping its row index in the raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub row_index: usize,
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct ResolvedTable {
    pub header: ResolvedHeader,
    pub rows: Vec<DataRow>,
    /// Rows removed here (did-not-play), with their raw row index.
    pub dropped: Vec<(usize, SkipReason)>,
}

impl ResolvedTable {
    pub fn cell<'r>(&self, row: &'r DataRow, column: &str) -> Option<&'r str> {
        let i = self.header.position(column)?;
        row.cells.get(i)?.as_deref()
    }
}

/// Turn a box-score grid into named columns and player rows.
///
/// The first two rows form the header; everything below is data.
pub fn resolve_table(table: &RawTable, options: &ParseOptions) -> Result<ResolvedTable, SkipReason> {
    if table.rows.len() < 2 {
        return Err(SkipReason::TooFewRows {
            rows: table.rows.len(),
        });
    }

    let mut names = flatten_header(&table.rows[0], &table.rows[1]);
    disambiguate_percent(&mut names);
    let header = ResolvedHeader::new(make_unique(names));

    let minutes = header
        .field_position(StatField::Minutes)
        .ok_or(SkipReason::NoMinutesColumn)?;

    let marker = options.did_not_play_marker.trim();
    let mut rows = Vec::new();
    let mut dropped = Vec::new();
    for (row_index, cells) in table.rows.iter().enumerate().skip(2) {
        let minutes_value = cells.get(minutes).and_then(|c| c.as_deref()).map(str::trim);
        if minutes_value == Some(marker) {
            dropped.push((row_index, SkipReason::DidNotPlay));
            continue;
        }
        rows.push(DataRow {
            row_index,
            cells: cells.clone(),
        });
    }

    Ok(ResolvedTable {
        header,
        rows,
        dropped,
    })
}

/// Combine the two header rows column by column.
///
/// "Field Goals" over "M/A" becomes "Field Goals M/A"; a label present in only
/// one of the rows is kept as is.
pub fn flatten_header(top: &[Option<String>], bottom: &[Option<String>]) -> Vec<String> {
    let width = top.len().max(bottom.len());
    (0..width)
        .map(|i| {
            let h1 = top.get(i).and_then(|c| c.as_deref()).unwrap_or("").trim();
            let h2 = bottom.get(i).and_then(|c| c.as_deref()).unwrap_or("").trim();
            match (h1.is_empty(), h2.is_empty()) {
                (false, false) => format!("{h1} {h2}"),
                (false, true) => h1.to_string(),
                (true, false) => h2.to_string(),
                (true, true) => String::new(),
            }
        })
        .collect()
}

/// Rename bare "%" columns after the shooting split they follow.
///
/// The report prints an unlabeled "%" after each made/attempted column. A "%"
/// in the first column has nothing to follow and is left alone.
pub fn disambiguate_percent(names: &mut [String]) {
    for j in 1..names.len() {
        if names[j] != "%" {
            continue;
        }
        let prev = &names[j - 1];
        let renamed = if prev.contains("2 Points") {
            "2 Points %".to_string()
        } else if prev.contains("3 Points") {
            "3 Points %".to_string()
        } else if prev.contains("Free Throws") {
            "Free Throws %".to_string()
        } else if prev.is_empty() {
            // Same name the unlabeled column gets from `make_unique`.
            format!("column_{} %", j - 1)
        } else {
            format!("{prev} %")
        };
        names[j] = renamed;
    }
}

/// Empty names become `column_<i>`; repeats get a ` (2)`, ` (3)`, ... suffix.
fn make_unique(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let base = if name.is_empty() {
                format!("column_{i}")
            } else {
                name
            };
            let mut candidate = base.clone();
            let mut n = 2;
            while seen.contains(&candidate) {
                candidate = format!("{base} ({n})");
                n += 1;
            }
            seen.insert(candidate.clone());
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
            .collect()
    }

    fn table(rows: Vec<Vec<Option<String>>>) -> RawTable {
        RawTable {
            index: 0,
            page_number: 1,
            rows,
        }
    }

    #[test]
    fn test_flatten_header() {
        let top = row(&["", "", "Field Goals", "", " Rebounds "]);
        let bottom = row(&["No", "Min", "M/A", "%", "OR"]);
        assert_eq!(
            flatten_header(&top, &bottom),
            vec!["No", "Min", "Field Goals M/A", "%", "Rebounds OR"]
        );
    }

    #[test]
    fn test_flatten_uneven_rows() {
        let top = row(&["Name", ""]);
        let bottom = row(&["", "", "PTS"]);
        assert_eq!(flatten_header(&top, &bottom), vec!["Name", "", "PTS"]);
    }

    #[test]
    fn test_disambiguate_percent() {
        let mut names: Vec<String> = [
            "Field Goals M/A",
            "%",
            "2 Points M/A",
            "%",
            "3 Points M/A",
            "%",
            "Free Throws M/A",
            "%",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        disambiguate_percent(&mut names);
        assert_eq!(
            names,
            vec![
                "Field Goals M/A",
                "Field Goals M/A %",
                "2 Points M/A",
                "2 Points %",
                "3 Points M/A",
                "3 Points %",
                "Free Throws M/A",
                "Free Throws %",
            ]
        );
    }

    #[test]
    fn test_percent_after_unlabeled_column() {
        let mut names: Vec<String> = ["%", "", "%", "PTS"].iter().map(|s| s.to_string()).collect();
        disambiguate_percent(&mut names);
        assert_eq!(names, vec!["%", "", "column_1 %", "PTS"]);
        assert_eq!(
            make_unique(names),
            vec!["%", "column_1", "column_1 %", "PTS"]
        );
    }

    #[test]
    fn test_make_unique() {
        let names = vec!["%".into(), "".into(), "%".into(), "PTS".into(), "%".into()];
        assert_eq!(
            make_unique(names),
            vec!["%", "column_1", "% (2)", "PTS", "% (3)"]
        );
    }

    #[test]
    fn test_resolve_drops_header_and_dnp_rows() {
        let t = table(vec![
            row(&["", "", "", "Field Goals", ""]),
            row(&["No", "Name", "Min", "M/A", "%"]),
            row(&["4", "Ann Lee", "24:10", "7/12", "58.3"]),
            row(&["5", "Bea Cole", " DNP ", "", ""]),
            row(&["6", "Cy Dunn", "12:00", "1/4", "25"]),
        ]);
        let resolved = resolve_table(&t, &ParseOptions::default()).unwrap();
        assert_eq!(
            resolved.header.names(),
            &["No", "Name", "Min", "Field Goals M/A", "Field Goals M/A %"]
        );
        assert_eq!(resolved.rows.len(), 2);
        assert_eq!(resolved.rows[0].row_index, 2);
        assert_eq!(resolved.rows[1].row_index, 4);
        assert_eq!(resolved.dropped, vec![(3, SkipReason::DidNotPlay)]);
        assert_eq!(resolved.cell(&resolved.rows[1], "Name"), Some("Cy Dunn"));
    }

    #[test]
    fn test_missing_minutes_column() {
        let t = table(vec![
            row(&["Team", "Q1", "Q2"]),
            row(&["", "PTS", "PTS"]),
            row(&["Kings", "20", "18"]),
        ]);
        assert_eq!(
            resolve_table(&t, &ParseOptions::default()).unwrap_err(),
            SkipReason::NoMinutesColumn
        );
    }

    #[test]
    fn test_single_row_table() {
        let t = table(vec![row(&["Min", "PTS"])]);
        assert_eq!(
            resolve_table(&t, &ParseOptions::default()).unwrap_err(),
            SkipReason::TooFewRows { rows: 1 }
        );
    }
}
