//! Extract command - pull cognitive test results out of notes.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use cogx_core::models::{LineSegment, Note};
use cogx_core::{Category, SegmentLabeler, TestResultExtractor};

use super::{csv_writer, load_config, read_notes};

/// Label used for a whole note processed as one segment.
const FULL_NOTE_LABEL: &str = "full_note";

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input CSV file or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tests to extract (default: every configured test)
    #[arg(short, long, value_delimiter = ',')]
    tests: Vec<String>,

    /// Split notes into labeled lines instead of using whole notes
    #[arg(long)]
    segment: bool,

    /// Resolve a date for each result
    #[arg(long)]
    dates: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let extractor = TestResultExtractor::new(&config.extraction)?
        .with_date_resolution(args.dates || config.extraction.resolve_dates);
    let labeler = SegmentLabeler::new(&config.ehr);

    let tests: Vec<String> = if args.tests.is_empty() {
        extractor.test_names().iter().map(|t| t.to_string()).collect()
    } else {
        args.tests.clone()
    };

    // An unconfigured test aborts the run before anything is written
    for test in &tests {
        if !extractor.has_test(test) {
            anyhow::bail!(
                "Test {} cannot be handled by the extractor (configured: {})",
                test,
                extractor.test_names().join(", ")
            );
        }
    }

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();
    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    let mut notes = Vec::new();
    for path in &files {
        notes.extend(read_notes(path)?);
    }
    info!("Loaded {} notes from {} files", notes.len(), files.len());

    let pb = ProgressBar::new(notes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} notes")?
            .progress_chars("=>-"),
    );

    let mut wtr = csv_writer(args.output.as_deref())?;

    let mut header = vec!["id".to_string(), "NoteID".to_string(), "segid".to_string(), "segment".to_string()];
    for test in &tests {
        header.push(test.clone());
        if args.dates {
            header.push(format!("{}_date", test));
        }
    }
    wtr.write_record(&header)?;

    let mut row_id = 0;
    let mut multiple = 0;

    for note in &notes {
        for segment in segments(note, &labeler, args.segment) {
            let mut row = vec![
                row_id.to_string(),
                note.id.clone(),
                segment.id.to_string(),
                segment.text.clone(),
            ];

            for test in &tests {
                let results = extractor.extract(test, &segment.text)?;
                if results.len() > 1 {
                    warn!(
                        "Multiple {} results for note {} segment {}",
                        test, note.id, segment.id
                    );
                    multiple += 1;
                }

                let values: Vec<&str> = results.iter().map(|r| r.value_or_na()).collect();
                row.push(values.join("; "));
                if args.dates {
                    let dates: Vec<&str> = results.iter().map(|r| r.date_or_na()).collect();
                    row.push(dates.join("; "));
                }
            }

            wtr.write_record(&row)?;
            row_id += 1;
        }
        pb.inc(1);
    }

    wtr.flush()?;
    pb.finish_and_clear();

    debug!("Segments with multiple results: {}", multiple);

    if let Some(output) = &args.output {
        println!(
            "{} Wrote {} rows for {} notes to {} in {:?}",
            style("✓").green(),
            row_id,
            notes.len(),
            output.display(),
            start.elapsed()
        );
    }

    Ok(())
}

/// Segments of a note that may carry test results.
///
/// Without line segmentation the whole note is one segment. Empty lines,
/// note attributes and everything after the signature are skipped.
fn segments(note: &Note, labeler: &SegmentLabeler, by_line: bool) -> Vec<LineSegment> {
    if !by_line {
        if note.text.trim().is_empty() {
            return Vec::new();
        }
        return vec![LineSegment {
            id: 1,
            text: note.text.clone(),
            category: Category::Content,
            raw_label: FULL_NOTE_LABEL.to_string(),
        }];
    }

    labeler
        .segment_note(note)
        .into_iter()
        .filter(|s| !s.text.trim().is_empty() && !s.category.is_metadata())
        .collect()
}
