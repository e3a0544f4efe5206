//! Console and JSON reporting of analysis results

use dexlab_core::{
    Column, Record,
    names::{LastName, LetterFrequency},
    query::{Extremes, TrainingSplit},
};
use serde::Serialize;

/// Results collected over one analysis run
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnalysisReport {
    pub strongest: Record,
    pub weakest: Record,
    pub average_hp: f64,
    pub last_names: Vec<LastName>,
    pub most_common_letter: char,
    pub letter_counts: LetterFrequency,
    pub vowel_std_dev: f64,
    /// Name produced by the standalone generator call, not used by the new record
    pub sample_name: String,
    pub new_record: Record,
    pub training_split: TrainingSplit,
}

pub(crate) fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| format!("{v}"))
}

pub(crate) fn print_extremes(extremes: &Extremes) {
    let Extremes { strongest, weakest } = extremes;
    println!(
        "Strongest Pokemon: {} (Total: {})",
        strongest.name,
        format_value(strongest.total)
    );
    println!(
        "Weakest Pokemon: {} (Total: {})",
        weakest.name,
        format_value(weakest.total)
    );
}

pub(crate) fn print_last_names(entries: &[LastName]) {
    println!("ID | Last Name");
    println!("{}", "-".repeat(20));
    for entry in entries {
        println!("{} | {}", entry.id, entry.last_name);
    }
}

pub(crate) fn print_new_record(record: &Record) {
    println!("New Pokemon: {} (ID: {})", record.name, record.id);
    match record.total {
        Some(total) => println!("Total: {total:.2}"),
        None => println!("Total: N/A"),
    }
}

pub(crate) fn print_training_split(split: &TrainingSplit) {
    println!("Pokemon needing training (moderate): {}", split.moderate);
    println!("Powerful Pokemon: {}", split.powerful);
}

/// Print a ranking table of records by one column
pub(crate) fn print_ranking(column: Column, records: &[&Record]) {
    println!("  {:>4} {:>5} {:<25} {:>10}", "Rank", "#", "Name", column);
    println!("  {}", "-".repeat(47));
    for (rank, record) in records.iter().enumerate() {
        println!(
            "  {:>4} {:>5} {:<25} {:>10}",
            rank + 1,
            record.id,
            record.name,
            format_value(record.value(column))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(318.0)), "318");
        assert_eq!(format_value(Some(0.25)), "0.25");
        assert_eq!(format_value(None), "N/A");
    }
}
