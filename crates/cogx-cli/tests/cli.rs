use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOTES: &str = "NoteID,ReportText\n\
N1,\"TITLE: NEUROLOGY CONSULT\nHPI:\nMMSE 28/30 today.\n/es/ JANE SMITH\"\n\
,\"Mother had dementia.\"\n\
END,\n";

const CONFIG: &str = "# test config\n\
key_sections: HPI, Plan, Family History\n\
min_section_length: 5\n\
window_size: 3\n\
MMSE: mmse, mini mental state exam\n\
MoCA: moca\n";

fn cogx() -> Command {
    Command::cargo_bin("cogx").unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_segment_labels_lines() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "segment"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("NoteID,segid,segment,seglabel,rawlabel"))
        .stdout(predicate::str::contains("N1,2,HPI:,HPI,HPI"))
        .stdout(predicate::str::contains("N1,3,MMSE 28/30 today.,HPI,content"))
        .stdout(predicate::str::contains("endofnote"))
        .stdout(predicate::str::contains("END").not());
}

#[test]
fn test_segment_masks_family_members() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", CONFIG);
    let output = dir.path().join("segments.csv");

    cogx()
        .args(["--config", &config_arg(&config), "segment", "--mask-family", "-o"])
        .arg(&output)
        .arg(&notes)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("family member had dementia."));
    assert!(!written.contains("Mother"));
}

#[test]
fn test_segment_normalizes_and_focuses() {
    let dir = TempDir::new().unwrap();
    let notes = write(
        &dir,
        "notes.csv",
        "NoteID,ReportText\nN1,\"Seen in clinic. Worried about AD per PCP. Return soon.\"\n",
    );
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "segment", "--normalize"])
        .args(["--focus", "AD", "--max-tokens", "4"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("N1,1,worried about Alzheimer per pcp.,content,content"));
}

#[test]
fn test_extract_scores() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "extract", "--dates"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("id,NoteID,segid,segment,MMSE,MMSE_date,MoCA,MoCA_date"))
        .stdout(predicate::str::contains("28/30,encounter_date,N/A,N/A"));
}

#[test]
fn test_extract_by_line() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "extract", "--segment", "--tests", "MMSE"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("0,N1,2,HPI:,N/A"))
        .stdout(predicate::str::contains("1,N1,3,MMSE 28/30 today.,28/30"))
        .stdout(predicate::str::contains("JANE SMITH").not());
}

#[test]
fn test_extract_unknown_test_fails() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "extract", "--tests", "GDS"])
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GDS"));
}

#[test]
fn test_extract_no_matching_files() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "cogx.cfg", CONFIG);
    let pattern = dir.path().join("*.csv");

    cogx()
        .args(["--config", &config_arg(&config), "extract"])
        .arg(pattern.display().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.csv", NOTES);
    let config = write(&dir, "cogx.cfg", "window_size 3\n");

    cogx()
        .args(["--config", &config_arg(&config), "segment"])
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_config_init() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cogx").join("config.json");

    cogx()
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    cogx()
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cogx()
        .args(["config", "init", "--force", "-o"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_config_show_text_config_as_json() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "cogx.cfg", CONFIG);

    cogx()
        .args(["--config", &config_arg(&config), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"window_size\": 3"))
        .stdout(predicate::str::contains("\"mini mental state exam\""));
}
