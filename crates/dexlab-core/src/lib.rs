//! Exploratory analysis of a creature statistics table.
//!
//! The crate loads a CSV table of creatures (identifier, name, one or two
//! types and seven numeric battle attributes) and offers a set of small
//! analysis operations over it:
//!
//! - **Queries** ([`query`]): strongest/weakest by total, column averages,
//!   top-N rankings and an HP threshold split
//! - **Names** ([`names`]): underscore renaming, last-name extraction and
//!   leading-letter frequencies
//! - **Generation** ([`generator`], [`synthesis`]): random names and a
//!   synthetic record assembled from table statistics
//! - **Normalization** ([`normalize`]): min-max scaling of numeric columns
//!
//! [`Analyzer`] ties these together around a working table and an untouched
//! snapshot of the loaded data.
//!
//! # Example
//!
//! ```no_run
//! use dexlab_core::{Analyzer, Column};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut analyzer = Analyzer::load("pokemon.csv")?;
//! let extremes = analyzer.extremes()?;
//! let average_hp = analyzer.average(Column::Hp)?;
//! println!("Strongest: {}", extremes.strongest.name);
//!
//! analyzer.append_synthetic(&mut rand::rng(), &extremes.strongest, average_hp)?;
//! analyzer.normalize();
//! analyzer.sort_by_name();
//! analyzer.save("pokemon_analysis_results.csv")?;
//! # Ok(())
//! # }
//! ```

pub use self::{
    analyzer::Analyzer,
    error::{AnalysisError, DatasetError},
    record::{Column, Record, UnknownColumnError},
    table::Table,
};

pub mod analyzer;
pub mod error;
pub mod generator;
pub mod names;
pub mod normalize;
pub mod query;
pub mod record;
pub mod synthesis;
pub mod table;
