//! Stateful analyzer holding the working and original tables.

use std::path::Path;

use rand::Rng;

use crate::{
    error::{AnalysisError, DatasetError},
    generator,
    names::{self, LastName, LetterFrequency},
    normalize,
    query::{self, Extremes, TrainingSplit},
    record::{Column, Record},
    synthesis,
    table::Table,
};

/// Dataset analyzer.
///
/// Owns two independent copies of the loaded table: the *working* table that
/// every mutating operation rewrites, and the *original* snapshot that is never
/// touched after construction. [`Analyzer::reset`] restores the working table
/// from the snapshot.
#[derive(Debug, Clone)]
pub struct Analyzer {
    original: Table,
    working: Table,
}

impl Analyzer {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            working: table.clone(),
            original: table,
        }
    }

    pub fn load<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        Table::load(path).map(Self::new)
    }

    /// Discards all changes to the working table.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
        tracing::debug!("working table reset to original");
    }

    #[must_use]
    pub fn original(&self) -> &Table {
        &self.original
    }

    #[must_use]
    pub fn working(&self) -> &Table {
        &self.working
    }

    pub fn extremes(&self) -> Result<Extremes, AnalysisError> {
        query::extremes(&self.working)
    }

    pub fn average(&self, column: Column) -> Result<f64, AnalysisError> {
        query::average(&self.working, column)
    }

    /// Underscores all names and reports last names of single-typed records.
    ///
    /// The last names come from the original table, so they are found even if
    /// the working names were already rewritten.
    pub fn rename(&mut self) -> Vec<LastName> {
        names::underscore_names(&mut self.working);
        let entries = names::last_names(&self.original, &self.working);
        tracing::debug!(last_names = entries.len(), "renamed records");
        entries
    }

    #[must_use]
    pub fn top_n(&self, column: Column, n: usize) -> Vec<&Record> {
        query::top_n(&self.working, column, n)
    }

    /// Leading-letter frequencies over the working names.
    #[must_use]
    pub fn letter_frequency(&self) -> LetterFrequency {
        let names = self
            .working
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        LetterFrequency::from_names(&names)
    }

    /// Appends a synthetic record with a freshly generated name.
    pub fn append_synthetic<R>(
        &mut self,
        rng: &mut R,
        strongest: &Record,
        average_hp: f64,
    ) -> Result<&Record, AnalysisError>
    where
        R: Rng + ?Sized,
    {
        let name = generator::generate_name(rng);
        let record = synthesis::synthesize_record(&self.working, name, strongest, average_hp)?;
        self.working.push(record);
        Ok(&self.working.records()[self.working.len() - 1])
    }

    #[must_use]
    pub fn training_split(&self, threshold: f64) -> TrainingSplit {
        query::training_split(&self.working, threshold)
    }

    pub fn normalize(&mut self) {
        normalize::normalize(&mut self.working);
        tracing::debug!("normalized numeric columns");
    }

    pub fn sort_by_name(&mut self) {
        self.working.sort_by_name();
    }

    /// Writes the working table to `path`.
    pub fn save<P>(&self, path: P) -> Result<(), DatasetError>
    where
        P: AsRef<Path>,
    {
        self.working.save(path)
    }
}
