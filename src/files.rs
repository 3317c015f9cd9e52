//! File sink: one pretty-printed JSON document per collection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::info;

use crate::pipeline::Dataset;

/// Default output directory for the file sink.
pub const DEFAULT_OUT_DIR: &str = "./data";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Envelope matching the service's import format.
#[derive(Serialize)]
struct DataFile<'a, T> {
    data: &'a [T],
}

/// Writes users, shops, examinations, and tests as four JSON files under
/// `dir`, creating the directory if needed.
///
/// Each file is shaped `{"data": [...]}` and pretty-printed with four-space
/// indentation. Wards are not persisted.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<(), WriteError> {
    fs::create_dir_all(dir)?;

    write_json(&dir.join("users.json"), &DataFile { data: &dataset.users })?;
    write_json(&dir.join("shops.json"), &DataFile { data: &dataset.shops })?;
    write_json(
        &dir.join("examinations.json"),
        &DataFile { data: &dataset.examinations },
    )?;
    write_json(&dir.join("tests.json"), &DataFile { data: &dataset.tests })?;

    info!("Wrote 4 collections to {}", dir.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), WriteError> {
    let writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    // Flush explicitly: flush-on-drop would swallow a write error and report
    // a truncated file as success.
    serializer.into_inner().flush()?;
    Ok(())
}
