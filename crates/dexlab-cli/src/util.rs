use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use dexlab_core::{Analyzer, DatasetError};
use rand::{SeedableRng as _, rngs::StdRng};

/// Writes `value` as pretty JSON followed by a newline
///
/// `-` selects stdout, any other path is created or truncated.
///
/// # Errors
///
/// Returns error if the destination cannot be created or written
pub fn write_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let (mut writer, target): (Box<dyn Write>, _) = if path == Path::new("-") {
        (Box::new(io::stdout().lock()), "stdout".to_owned())
    } else {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        (Box::new(BufWriter::new(file)), path.display().to_string())
    };

    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer).with_context(|| format!("Failed to write JSON to {target}"))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {target}"))?;
    Ok(())
}

/// Load the dataset at `path` into an analyzer
///
/// A missing file is not treated as a failure: a diagnostic is printed and
/// `None` is returned so the caller can stop cleanly.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed
pub fn load_dataset(path: &Path) -> anyhow::Result<Option<Analyzer>> {
    match Analyzer::load(path) {
        Ok(analyzer) => {
            tracing::info!(
                path = %path.display(),
                records = analyzer.working().len(),
                "loaded dataset"
            );
            Ok(Some(analyzer))
        }
        Err(DatasetError::SourceNotFound { path }) => {
            tracing::warn!(path = %path.display(), "dataset not found");
            println!("Error: Could not find {}", path.display());
            println!("Please download the Pokemon dataset and place it at that path.");
            Ok(None)
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to load dataset: {}", path.display()))
        }
    }
}

/// Random generator pinned to `seed`, or seeded from the OS when absent
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
