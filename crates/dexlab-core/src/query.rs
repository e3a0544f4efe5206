//! Extremum and aggregate queries over a table.

use serde::Serialize;

use crate::{
    error::AnalysisError,
    record::{Column, Record},
    table::Table,
};

/// Number of records returned by the top-N queries of the analysis run.
pub const TOP_N: usize = 10;

/// Strongest and weakest records by `Total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes {
    pub strongest: Record,
    pub weakest: Record,
}

/// Record counts on either side of an HP threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingSplit {
    /// Records with HP at or below the threshold.
    pub moderate: usize,
    /// Records with HP above the threshold.
    pub powerful: usize,
}

/// Returns the first record holding the largest value of `column`.
///
/// Records missing the value are skipped.
#[must_use]
pub fn max_by_column(table: &Table, column: Column) -> Option<&Record> {
    extreme_by(table, column, |candidate, best| candidate > best)
}

/// Returns the first record holding the smallest value of `column`.
#[must_use]
pub fn min_by_column(table: &Table, column: Column) -> Option<&Record> {
    extreme_by(table, column, |candidate, best| candidate < best)
}

fn extreme_by<F>(table: &Table, column: Column, replaces: F) -> Option<&Record>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<(&Record, f64)> = None;
    for record in table.iter() {
        let Some(value) = record.value(column) else {
            continue;
        };
        if best.is_none_or(|(_, best_value)| replaces(value, best_value)) {
            best = Some((record, value));
        }
    }
    best.map(|(record, _)| record)
}

pub fn strongest(table: &Table) -> Result<&Record, AnalysisError> {
    max_by_column(table, Column::Total).ok_or_else(|| no_values(table, Column::Total))
}

pub fn weakest(table: &Table) -> Result<&Record, AnalysisError> {
    min_by_column(table, Column::Total).ok_or_else(|| no_values(table, Column::Total))
}

pub fn extremes(table: &Table) -> Result<Extremes, AnalysisError> {
    Ok(Extremes {
        strongest: strongest(table)?.clone(),
        weakest: weakest(table)?.clone(),
    })
}

/// Mean of `column`, ignoring records where the value is missing.
pub fn average(table: &Table, column: Column) -> Result<f64, AnalysisError> {
    let values = table.values(column).collect::<Vec<_>>();
    dexlab_stats::descriptive::mean(&values).ok_or_else(|| no_values(table, column))
}

/// Returns up to `n` records with the largest values of `column`, descending.
///
/// Ties keep table order; records missing the value are left out.
#[must_use]
pub fn top_n(table: &Table, column: Column, n: usize) -> Vec<&Record> {
    let mut ranked = table
        .iter()
        .filter_map(|r| r.value(column).map(|v| (r, v)))
        .collect::<Vec<_>>();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked.truncate(n);
    ranked.into_iter().map(|(r, _)| r).collect()
}

/// Splits records by whether their HP exceeds `threshold`.
///
/// Records without an HP value fall on neither side.
#[must_use]
pub fn training_split(table: &Table, threshold: f64) -> TrainingSplit {
    let mut split = TrainingSplit {
        moderate: 0,
        powerful: 0,
    };
    for hp in table.values(Column::Hp) {
        if hp <= threshold {
            split.moderate += 1;
        } else if hp > threshold {
            split.powerful += 1;
        }
    }
    split
}

fn no_values(table: &Table, column: Column) -> AnalysisError {
    if table.is_empty() {
        AnalysisError::EmptyTable
    } else {
        AnalysisError::NoValues { column }
    }
}
