//! Segment command - label every line of every note.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use cogx_core::augment::{concentrate, transform};
use cogx_core::{FamilyMemberMasker, SegmentLabeler};

use super::{csv_writer, load_config, read_notes};

/// Arguments for the segment command.
#[derive(Args)]
pub struct SegmentArgs {
    /// Input CSV with NoteID and ReportText columns
    #[arg(required = true)]
    input: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace mentions of relatives with "family member"
    #[arg(long)]
    mask_family: bool,

    /// Lower-case text and spell out AD/Alzheimer variants as "Alzheimer"
    #[arg(long)]
    normalize: bool,

    /// Shorten long lines to the first sentence containing this word
    #[arg(long)]
    focus: Option<String>,

    /// Lines with more tokens than this are shortened by --focus
    #[arg(long, default_value_t = 100)]
    max_tokens: usize,
}

pub fn run(args: SegmentArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let labeler = SegmentLabeler::new(&config.ehr);
    let masker = if args.mask_family {
        Some(FamilyMemberMasker::new(&config.ehr)?)
    } else {
        None
    };

    let notes = read_notes(&args.input)?;
    let mut wtr = csv_writer(args.output.as_deref())?;
    wtr.write_record(["NoteID", "segid", "segment", "seglabel", "rawlabel"])?;

    let mut lines = 0;
    for note in &notes {
        for segment in labeler.segment_note(note) {
            let mut text = segment.text;
            if let Some(focus) = &args.focus {
                text = concentrate(&text, args.max_tokens, focus).0;
            }
            if let Some(masker) = &masker {
                text = masker.mask(&text).0;
            }
            if args.normalize {
                text = transform(&text).0;
            }
            wtr.write_record([
                note.id.as_str(),
                &segment.id.to_string(),
                &text,
                segment.category.name(),
                &segment.raw_label,
            ])?;
            lines += 1;
        }
    }
    wtr.flush()?;

    info!(
        "Labeled {} lines from {} notes in {:?}",
        lines,
        notes.len(),
        start.elapsed()
    );

    if let Some(output) = &args.output {
        println!(
            "{} Wrote {} labeled lines to {}",
            style("✓").green(),
            lines,
            output.display()
        );
    }

    Ok(())
}
