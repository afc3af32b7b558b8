//! Subcommands and the note input they share.

pub mod config;
pub mod extract;
pub mod segment;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use cogx_core::models::{CogxConfig, Note};

/// Marker row that closes a block of notes in exported spreadsheets.
const END_MARKER: &str = "END";

/// Default config location under the user's config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cogx")
        .join("config.json")
}

/// Load the config from `path`, else the default location, else defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CogxConfig> {
    if let Some(path) = path {
        return Ok(CogxConfig::load(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(CogxConfig::load(&default_path)?)
    } else {
        Ok(CogxConfig::default())
    }
}

#[derive(Debug, Deserialize)]
struct NoteRecord {
    #[serde(rename = "NoteID")]
    note_id: Option<String>,
    #[serde(rename = "ReportText")]
    report_text: Option<String>,
}

/// Read notes from a CSV file with `NoteID` and `ReportText` columns.
///
/// `END` rows are dropped first. A blank `NoteID` then continues the id of
/// the last note read.
pub fn read_notes(path: &Path) -> anyhow::Result<Vec<Note>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut notes = Vec::new();
    let mut last_id: Option<String> = None;

    for record in reader.deserialize() {
        let record: NoteRecord = record?;

        let id = record
            .note_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        // END rows close a block but never become the id of the rows after them
        if id.as_deref() == Some(END_MARKER) {
            continue;
        }

        let id = match id.or_else(|| last_id.clone()) {
            Some(id) => id,
            None => anyhow::bail!("{}: first row has no NoteID", path.display()),
        };
        last_id = Some(id.clone());

        notes.push(Note::new(id, record.report_text.unwrap_or_default()));
    }

    debug!("Read {} notes from {}", notes.len(), path.display());

    Ok(notes)
}

/// CSV writer over the output file, or stdout when none is given.
pub fn csv_writer(output: Option<&Path>) -> anyhow::Result<csv::Writer<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}
