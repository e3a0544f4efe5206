//! In-memory table and its CSV codec.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::Path,
};

use crate::{
    error::DatasetError,
    record::{Column, Record},
};

const ID_HEADER: &str = "#";
const NAME_HEADER: &str = "Name";
const TYPE1_HEADER: &str = "Type 1";
const TYPE2_HEADER: &str = "Type 2";

/// Headers every input file must carry, in output order.
pub const REQUIRED_HEADERS: [&str; 11] = [
    ID_HEADER,
    NAME_HEADER,
    TYPE1_HEADER,
    TYPE2_HEADER,
    "Total",
    "HP",
    "Attack",
    "Defense",
    "Sp. Atk",
    "Sp. Def",
    "Speed",
];

/// Cell contents read as a missing value, compared case-insensitively.
const MISSING_TOKENS: [&str; 15] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None",
];

/// Ordered collection of records sharing one column schema.
///
/// Columns outside [`REQUIRED_HEADERS`] are carried through untouched as
/// `extra_columns`, so a load followed by a save does not drop them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    extra_columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_extra_columns(vec![], records)
    }

    /// Creates a table carrying extra columns.
    ///
    /// Each record's `extra` values are padded or cut to match `extra_columns`.
    #[must_use]
    pub fn with_extra_columns(extra_columns: Vec<String>, records: Vec<Record>) -> Self {
        let mut this = Self {
            extra_columns,
            records: Vec::with_capacity(records.len()),
        };
        for record in records {
            this.push(record);
        }
        this
    }

    #[must_use]
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Appends a record, leaving any extra column it does not know about empty.
    pub fn push(&mut self, mut record: Record) {
        record.extra.resize(self.extra_columns.len(), String::new());
        self.records.push(record);
    }

    /// Returns the present values of `column`, skipping missing entries.
    pub fn values(&self, column: Column) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(move |r| r.value(column))
    }

    /// Returns the largest identifier in the table.
    #[must_use]
    pub fn max_id(&self) -> Option<u32> {
        self.records.iter().map(|r| r.id).max()
    }

    /// Sorts records by name in ascending byte order.
    ///
    /// The sort is stable, so records with equal names keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Loads a table from a CSV file.
    ///
    /// A path that does not exist is reported as [`DatasetError::SourceNotFound`].
    pub fn load<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DatasetError::SourceNotFound {
                path: path.to_owned(),
            },
            _ => DatasetError::Open {
                path: path.to_owned(),
                source,
            },
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            records = table.len(),
            extra_columns = table.extra_columns.len(),
            "loaded dataset"
        );
        Ok(table)
    }

    /// Parses a table from CSV data with a header row.
    pub fn from_reader<R>(reader: R) -> Result<Self, DatasetError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut required = [0; REQUIRED_HEADERS.len()];
        for (slot, name) in required.iter_mut().zip(REQUIRED_HEADERS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn { column: name })?;
        }
        let extra_indices = (0..headers.len())
            .filter(|idx| !required.contains(idx))
            .collect::<Vec<_>>();
        let extra_columns = extra_indices
            .iter()
            .map(|&idx| headers[idx].to_owned())
            .collect();

        let mut records = vec![];
        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, csv::Position::line);
            let field = |slot: usize| row.get(required[slot]).unwrap_or_default();
            let number = |slot: usize| parse_number(line, REQUIRED_HEADERS[slot], field(slot));

            let id_text = field(0).trim();
            let id = id_text.parse().map_err(|_| DatasetError::InvalidField {
                line,
                column: ID_HEADER,
                value: id_text.to_owned(),
            })?;
            let type2 = Some(field(3).to_owned()).filter(|t| !is_missing(t));

            records.push(Record {
                id,
                name: field(1).to_owned(),
                type1: field(2).to_owned(),
                type2,
                total: number(4)?,
                hp: number(5)?,
                attack: number(6)?,
                defense: number(7)?,
                sp_atk: number(8)?,
                sp_def: number(9)?,
                speed: number(10)?,
                extra: extra_indices
                    .iter()
                    .map(|&idx| row.get(idx).unwrap_or_default().to_owned())
                    .collect(),
            });
        }

        Ok(Self::with_extra_columns(extra_columns, records))
    }

    /// Writes the table to a CSV file, replacing any existing file.
    pub fn save<P>(&self, path: P) -> Result<(), DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| DatasetError::Create {
            path: path.to_owned(),
            source,
        })?;
        self.to_writer(BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), records = self.len(), "saved dataset");
        Ok(())
    }

    /// Writes the table as CSV with a header row and no index column.
    pub fn to_writer<W>(&self, writer: W) -> Result<(), DatasetError>
    where
        W: io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(
            REQUIRED_HEADERS
                .iter()
                .copied()
                .chain(self.extra_columns.iter().map(String::as_str)),
        )?;
        for record in &self.records {
            let mut row = vec![
                record.id.to_string(),
                record.name.clone(),
                record.type1.clone(),
                record.type2.clone().unwrap_or_default(),
            ];
            row.extend(Column::ALL.map(|column| format_number(record.value(column))));
            row.extend(record.extra.iter().cloned());
            writer.write_record(&row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

fn parse_number(line: u64, column: &'static str, text: &str) -> Result<Option<f64>, DatasetError> {
    let text = text.trim();
    if is_missing(text) {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(|v| Some(v).filter(|v| !v.is_nan()))
        .map_err(|_| DatasetError::InvalidField {
            line,
            column,
            value: text.to_owned(),
        })
}

fn is_missing(text: &str) -> bool {
    let text = text.trim();
    MISSING_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(text))
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
