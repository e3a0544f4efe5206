//! Name rewriting and leading-letter statistics.

use std::{
    collections::{BTreeMap, HashSet},
    iter,
};

use serde::Serialize;

use crate::{error::AnalysisError, table::Table};

/// Letters whose leading counts feed [`vowel_std_dev`].
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Identifier paired with the last word of a multi-word name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LastName {
    pub id: u32,
    pub last_name: String,
}

/// Replaces every space in every name of `table` with an underscore.
pub fn underscore_names(table: &mut Table) {
    for record in table.records_mut() {
        if record.name.contains(' ') {
            record.name = record.name.replace(' ', "_");
        }
    }
}

/// Collects last names of single-typed records whose original name has a space.
///
/// Rows of `original` and `working` are paired by position; names are taken
/// from `original` so earlier renames do not hide the spaces, while the type
/// check and identifier come from `working`. Pairs repeating an earlier
/// `(id, last_name)` are dropped.
#[must_use]
pub fn last_names(original: &Table, working: &Table) -> Vec<LastName> {
    let mut seen = HashSet::new();
    iter::zip(original.iter(), working.iter())
        .filter(|(orig, work)| orig.name.contains(' ') && work.secondary_type().is_none())
        .filter_map(|(orig, work)| {
            let last_name = orig.name.rsplit(' ').next()?.to_owned();
            Some(LastName {
                id: work.id,
                last_name,
            })
        })
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// Counts names starting with `letter`, ignoring case.
#[must_use]
pub fn leading_letter_count<S>(names: &[S], letter: char) -> usize
where
    S: AsRef<str>,
{
    let prefix = letter.to_lowercase().collect::<String>();
    names
        .iter()
        .filter(|name| name.as_ref().to_lowercase().starts_with(&prefix))
        .count()
}

/// Leading-letter counts for every letter `a` to `z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterFrequency {
    counts: BTreeMap<char, usize>,
}

impl LetterFrequency {
    /// Counts leading letters over `names`.
    #[must_use]
    pub fn from_names<S>(names: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let counts = ('a'..='z')
            .map(|letter| (letter, leading_letter_count(names, letter)))
            .collect();
        Self { counts }
    }

    /// Count for `letter`, or `0` for anything outside `a`..=`z`.
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Returns the letter with the highest count and the count itself.
    ///
    /// Letters are scanned from `a` to `z` and the first one reaching the
    /// maximum wins.
    #[must_use]
    pub fn most_common(&self) -> (char, usize) {
        let mut best = ('a', self.get('a'));
        for (&letter, &count) in &self.counts {
            if count > best.1 {
                best = (letter, count);
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    #[must_use]
    pub fn vowel_counts(&self) -> [usize; 5] {
        VOWELS.map(|vowel| self.get(vowel))
    }
}

/// Sample standard deviation of the vowel leading-letter counts.
#[expect(clippy::cast_precision_loss)]
pub fn vowel_std_dev(frequency: &LetterFrequency) -> Result<f64, AnalysisError> {
    let counts = frequency.vowel_counts().map(|c| c as f64);
    dexlab_stats::descriptive::sample_std_dev(&counts).ok_or(AnalysisError::InsufficientData {
        required: 2,
        actual: counts.len(),
    })
}
