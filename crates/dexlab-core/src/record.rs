//! Row model of the creature statistics table.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::AnalysisError;

/// One of the seven numeric columns of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Total,
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.header(), f)
    }
}

impl Column {
    /// All numeric columns in header order.
    pub const ALL: [Column; 7] = [
        Column::Total,
        Column::Hp,
        Column::Attack,
        Column::Defense,
        Column::SpAtk,
        Column::SpDef,
        Column::Speed,
    ];

    /// Header text used in the CSV file.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::Total => "Total",
            Column::Hp => "HP",
            Column::Attack => "Attack",
            Column::Defense => "Defense",
            Column::SpAtk => "Sp. Atk",
            Column::SpDef => "Sp. Def",
            Column::Speed => "Speed",
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown column '{name}'")]
pub struct UnknownColumnError {
    pub name: String,
}

impl FromStr for Column {
    type Err = UnknownColumnError;

    /// Parses a column from its header text.
    ///
    /// Matching ignores case and any non-alphanumeric characters, so `Sp. Def`,
    /// `sp_def` and `SPDEF` all name the same column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_key(s);
        Column::ALL
            .into_iter()
            .find(|column| fold_key(column.header()) == key)
            .ok_or_else(|| UnknownColumnError { name: s.to_owned() })
    }
}

fn fold_key(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A single catalogued creature.
///
/// `total` is stored independently and is not kept in sync with the six
/// attribute columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub type1: String,
    pub type2: Option<String>,
    pub total: Option<f64>,
    pub hp: Option<f64>,
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub sp_atk: Option<f64>,
    pub sp_def: Option<f64>,
    pub speed: Option<f64>,
    /// Values of non-required columns, in the table's extra-column order.
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl Record {
    #[must_use]
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Total => self.total,
            Column::Hp => self.hp,
            Column::Attack => self.attack,
            Column::Defense => self.defense,
            Column::SpAtk => self.sp_atk,
            Column::SpDef => self.sp_def,
            Column::Speed => self.speed,
        }
    }

    pub fn value_mut(&mut self, column: Column) -> &mut Option<f64> {
        match column {
            Column::Total => &mut self.total,
            Column::Hp => &mut self.hp,
            Column::Attack => &mut self.attack,
            Column::Defense => &mut self.defense,
            Column::SpAtk => &mut self.sp_atk,
            Column::SpDef => &mut self.sp_def,
            Column::Speed => &mut self.speed,
        }
    }

    /// Returns the value of `column`, failing if it is missing.
    pub fn require(&self, column: Column) -> Result<f64, AnalysisError> {
        self.value(column).ok_or_else(|| AnalysisError::MissingValue {
            id: self.id,
            name: self.name.clone(),
            column,
        })
    }

    /// Secondary type, treating an empty string as absent.
    #[must_use]
    pub fn secondary_type(&self) -> Option<&str> {
        self.type2.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns `true` if either type equals `kind`.
    #[must_use]
    pub fn has_type(&self, kind: &str) -> bool {
        self.type1 == kind || self.secondary_type() == Some(kind)
    }
}
