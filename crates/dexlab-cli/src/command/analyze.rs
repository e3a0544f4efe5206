//! Full analysis run
//!
//! Executes every analysis step in a fixed order, threading the values
//! computed by earlier steps (extremes, average HP, letter frequencies) into
//! the later ones, and saves the transformed table.

use std::path::PathBuf;

use anyhow::Context;
use dexlab_core::{Analyzer, Column, generator, names, query::TOP_N};
use rand::Rng;

use crate::{
    report::{self, AnalysisReport},
    util,
};

const DEFAULT_INPUT: &str = "pokemon.csv";
const DEFAULT_OUTPUT: &str = "pokemon_analysis_results.csv";
const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the input CSV dataset
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the CSV file the transformed dataset is written to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the collected results as JSON to this path (`-` for stdout)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Seed for the name generator; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of records in the top-N speed ranking
    #[arg(long, default_value_t = TOP_N)]
    pub top: usize,
}

impl Default for AnalyzeArg {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: None,
            seed: None,
            top: TOP_N,
        }
    }
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let Some(mut analyzer) = util::load_dataset(&arg.input)? else {
        return Ok(());
    };
    let mut rng = util::rng_from_seed(arg.seed);

    println!("Starting Pokemon Dataset Analysis...");
    println!("{}", "=".repeat(BANNER_WIDTH));

    let analysis = analyze(&mut analyzer, &mut rng, arg.top)?;

    analyzer
        .save(&arg.output)
        .with_context(|| format!("Failed to save results to {}", arg.output.display()))?;
    tracing::info!(path = %arg.output.display(), "saved analysis results");

    if let Some(path) = &arg.report {
        util::write_json(&analysis, path)?;
    }

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("Analysis complete!");
    Ok(())
}

/// Runs every step up to and including the final sort, printing a report line
/// per step.
fn analyze<R>(analyzer: &mut Analyzer, rng: &mut R, top: usize) -> anyhow::Result<AnalysisReport>
where
    R: Rng + ?Sized,
{
    let extremes = analyzer.extremes().context("Failed to find extremes")?;
    report::print_extremes(&extremes);

    let average_hp = analyzer
        .average(Column::Hp)
        .context("Failed to compute average HP")?;
    println!("Average HP: {average_hp:.2}");

    let last_names = analyzer.rename();
    report::print_last_names(&last_names);

    let fastest = analyzer.top_n(Column::Speed, top);
    tracing::debug!(count = fastest.len(), "ranked records by speed");

    let letter_counts = analyzer.letter_frequency();
    let (most_common_letter, max_count) = letter_counts.most_common();
    println!("Most common starting letter: '{most_common_letter}' ({max_count} pokemon)");

    let vowel_std_dev =
        names::vowel_std_dev(&letter_counts).context("Failed to compute vowel deviation")?;
    println!("Vowel counts: {:?}", letter_counts.vowel_counts());
    println!("Standard deviation: {vowel_std_dev:.2}");

    let sample_name = generator::generate_name(rng);
    tracing::debug!(%sample_name, "generated sample name");

    let new_record = analyzer
        .append_synthetic(rng, &extremes.strongest, average_hp)
        .context("Failed to synthesize a new record")?
        .clone();
    report::print_new_record(&new_record);

    let training_split = analyzer.training_split(average_hp);
    report::print_training_split(&training_split);

    analyzer.normalize();
    println!("All numeric fields have been normalized to (0-1) interval");

    analyzer.sort_by_name();

    Ok(AnalysisReport {
        strongest: extremes.strongest,
        weakest: extremes.weakest,
        average_hp,
        last_names,
        most_common_letter,
        letter_counts,
        vowel_std_dev,
        sample_name,
        new_record,
        training_split,
    })
}

#[cfg(test)]
mod tests {
    use dexlab_core::Table;
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    const FIXTURE_CSV: &str = "\
#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed
1,Bulbasaur,Grass,Poison,318,10,49,49,65,65,45
6,Charizard Mega X,Fire,Dragon,634,20,130,111,130,85,100
25,Pikachu,Electric,,320,30,55,40,50,50,90
150,Mewtwo Mega Y,Psychic,,780,40,150,70,194,120,140
";

    fn fixture_analyzer() -> Analyzer {
        Analyzer::new(Table::from_reader(FIXTURE_CSV.as_bytes()).unwrap())
    }

    #[test]
    fn test_analyze_fixture() {
        let mut analyzer = fixture_analyzer();
        let mut rng = StdRng::seed_from_u64(11);
        let report = analyze(&mut analyzer, &mut rng, TOP_N).unwrap();

        assert_eq!(report.strongest.id, 150);
        assert_eq!(report.weakest.id, 1);
        assert_eq!(report.average_hp, 25.0);
        assert_eq!(report.last_names.len(), 1);
        assert_eq!(report.most_common_letter, 'b');
        assert_eq!(report.new_record.id, 151);
        assert_eq!(report.new_record.hp, Some(25.0));
        // the new record's HP equals the threshold and counts as moderate
        assert_eq!(report.training_split.moderate, 3);
        assert_eq!(report.training_split.powerful, 2);
    }

    #[test]
    fn test_analyze_leaves_sorted_normalized_table() {
        let mut analyzer = fixture_analyzer();
        let mut rng = StdRng::seed_from_u64(5);
        analyze(&mut analyzer, &mut rng, TOP_N).unwrap();

        let working = analyzer.working();
        assert_eq!(working.len(), 5);
        assert!(working.records().windows(2).all(|w| w[0].name <= w[1].name));
        assert!(working.iter().all(|r| !r.name.contains(' ')));
        for column in Column::ALL {
            assert!(working.values(column).all(|v| (0.0..=1.0).contains(&v)));
        }
        assert_eq!(analyzer.original().len(), 4);
    }

    #[test]
    fn test_run_with_missing_input_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let arg = AnalyzeArg {
            input: dir.path().join("pokemon.csv"),
            output: dir.path().join("out.csv"),
            ..AnalyzeArg::default()
        };
        run(&arg).unwrap();
        assert!(!arg.output.exists());
    }

    #[test]
    fn test_run_writes_output_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pokemon.csv");
        std::fs::write(&input, FIXTURE_CSV).unwrap();
        let arg = AnalyzeArg {
            input,
            output: dir.path().join("out.csv"),
            report: Some(dir.path().join("report.json")),
            seed: Some(1),
            top: TOP_N,
        };
        run(&arg).unwrap();

        let saved = Table::load(&arg.output).unwrap();
        assert_eq!(saved.len(), 5);

        let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["average_hp"], 25.0);
        assert_eq!(value["strongest"]["name"], "Mewtwo Mega Y");
        assert_eq!(value["letter_counts"]["b"], 1);
    }
}
