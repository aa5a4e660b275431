//! Reconstruct table grids from positioned words.
//!
//! Words are grouped into visual rows, rows are cut into cell segments at wide
//! horizontal gaps, and consecutive rows with enough segments form a table.
//! Column boundaries come from the widest rows of the table; narrower rows
//! (spanning group headers, rows with blank cells) are placed against them.

use crate::config::TableSettings;
use crate::extraction::Word;

#[derive(Debug, Clone)]
struct VisualRow<'a> {
    anchor_y: f32,
    y_min: f32,
    y_max: f32,
    words: Vec<&'a Word>,
}

impl<'a> VisualRow<'a> {
    fn new(word: &'a Word) -> Self {
        VisualRow {
            anchor_y: word.bbox.center_y(),
            y_min: word.bbox.y_min,
            y_max: word.bbox.y_max,
            words: vec![word],
        }
    }

    fn push(&mut self, word: &'a Word) {
        self.y_min = self.y_min.min(word.bbox.y_min);
        self.y_max = self.y_max.max(word.bbox.y_max);
        self.words.push(word);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    x_min: f32,
    x_max: f32,
}

#[derive(Debug, Clone)]
struct SegmentedRow {
    y_min: f32,
    y_max: f32,
    segments: Vec<Segment>,
}

fn group_rows(words: &[Word], tolerance: f32) -> Vec<VisualRow<'_>> {
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by(|a, b| {
        a.bbox
            .center_y()
            .total_cmp(&b.bbox.center_y())
            .then(a.bbox.x_min.total_cmp(&b.bbox.x_min))
    });

    let mut rows: Vec<VisualRow> = Vec::new();
    for word in sorted {
        match rows.last_mut() {
            Some(row) if (word.bbox.center_y() - row.anchor_y).abs() <= tolerance => {
                row.push(word)
            }
            _ => rows.push(VisualRow::new(word)),
        }
    }

    for row in &mut rows {
        row.words.sort_by(|a, b| a.bbox.x_min.total_cmp(&b.bbox.x_min));
    }
    rows
}

/// Plain text of a page: one line per visual row, words separated by a space.
pub fn page_text(words: &[Word], row_tolerance: f32) -> String {
    group_rows(words, row_tolerance)
        .iter()
        .map(|row| {
            row.words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_segments(row: &VisualRow, cell_gap: f32) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for word in &row.words {
        match segments.last_mut() {
            Some(seg) if word.bbox.x_min - seg.x_max <= cell_gap => {
                seg.text.push(' ');
                seg.text.push_str(&word.text);
                seg.x_max = seg.x_max.max(word.bbox.x_max);
            }
            _ => segments.push(Segment {
                text: word.text.clone(),
                x_min: word.bbox.x_min,
                x_max: word.bbox.x_max,
            }),
        }
    }
    segments
}

/// Detect every table on a page, top to bottom.
pub fn detect_tables(words: &[Word], settings: &TableSettings) -> Vec<Vec<Vec<Option<String>>>> {
    let rows: Vec<SegmentedRow> = group_rows(words, settings.row_tolerance)
        .iter()
        .map(|row| SegmentedRow {
            y_min: row.y_min,
            y_max: row.y_max,
            segments: split_segments(row, settings.cell_gap),
        })
        .collect();

    let mut tables = Vec::new();
    let mut run: Vec<&SegmentedRow> = Vec::new();

    for row in &rows {
        let tabular = row.segments.len() >= settings.min_columns;
        let contiguous = run
            .last()
            .map_or(true, |prev| row.y_min - prev.y_max <= settings.max_row_gap);

        if tabular && contiguous {
            run.push(row);
            continue;
        }

        flush_run(&mut run, &mut tables);
        if tabular {
            run.push(row);
        }
    }
    flush_run(&mut run, &mut tables);

    tables
}

fn flush_run(run: &mut Vec<&SegmentedRow>, tables: &mut Vec<Vec<Vec<Option<String>>>>) {
    if run.len() >= 2 {
        let grid = build_grid(run);
        if !grid.is_empty() {
            tables.push(grid);
        }
    }
    run.clear();
}

fn build_grid(rows: &[&SegmentedRow]) -> Vec<Vec<Option<String>>> {
    let widest = rows.iter().map(|r| r.segments.len()).max().unwrap_or(0);
    let mut spans: Vec<(f32, f32)> = rows
        .iter()
        .filter(|r| r.segments.len() == widest)
        .flat_map(|r| r.segments.iter().map(|s| (s.x_min, s.x_max)))
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    let columns = merge_spans(spans);
    if columns.is_empty() {
        return Vec::new();
    }

    rows.iter()
        .map(|row| {
            let mut cells: Vec<Option<String>> = vec![None; columns.len()];
            for seg in &row.segments {
                match &mut cells[column_for(&columns, seg)] {
                    Some(text) => {
                        text.push(' ');
                        text.push_str(&seg.text);
                    }
                    slot @ None => *slot = Some(seg.text.clone()),
                }
            }
            cells
        })
        .collect()
}

/// Merge overlapping horizontal spans (sorted by start) into column spans.
fn merge_spans(spans: Vec<(f32, f32)>) -> Vec<(f32, f32)> {
    let mut columns: Vec<(f32, f32)> = Vec::new();
    for (start, end) in spans {
        match columns.last_mut() {
            Some(col) if start <= col.1 => col.1 = col.1.max(end),
            _ => columns.push((start, end)),
        }
    }
    columns
}

/// Leftmost overlapping column, or the nearest one when nothing overlaps.
fn column_for(columns: &[(f32, f32)], seg: &Segment) -> usize {
    if let Some(i) = columns
        .iter()
        .position(|&(start, end)| seg.x_min <= end && seg.x_max >= start)
    {
        return i;
    }
    let center = (seg.x_min + seg.x_max) / 2.0;
    columns
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = ((a.0 + a.1) / 2.0 - center).abs();
            let db = ((b.0 + b.1) / 2.0 - center).abs();
            da.total_cmp(&db)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}
