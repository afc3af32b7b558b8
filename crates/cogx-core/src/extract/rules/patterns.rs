//! Regex patterns for cognitive test result extraction.
//!
//! Rules that inspect the right context match it lower-cased, so the
//! patterns below are written in lower case.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Generic numeric scores (MMSE, MoCA, SLUMS)
    pub static ref INTEGER_TOKEN: Regex = Regex::new(r"^\d+$").unwrap();

    pub static ref FRACTION_TOKEN: Regex = Regex::new(
        r"(?:^|[^/0-9])(\d+/\d{2})(?:[^/0-9]|$)"
    ).unwrap();

    pub static ref SCORE_BEFORE_ON: Regex = Regex::new(
        r"[^/0-9](\d+/\d{2})[^/]\s*on(?:\s|$)|\s(\d+)\s+on(?:\s|$)"
    ).unwrap();

    // Boston Naming Test
    pub static ref BNT_PERCENTILE: Regex = Regex::new(r"^\D*(\d+[a-z]{2})\s+percentile").unwrap();

    pub static ref BNT_FRACTION: Regex = Regex::new(r"^\D*(\d+/\d{2})").unwrap();

    pub static ref BNT_NUMBER: Regex = Regex::new(r"^\D*(\d{1,2})\b").unwrap();

    // Benton Visual Retention Test
    pub static ref BENTON_FRACTION: Regex = Regex::new(r"^\D*(\d+/10)\b").unwrap();

    pub static ref BENTON_RANGE: Regex = Regex::new(
        r"^\D*(average|borderline impair[a-z]+)\s+range"
    ).unwrap();

    pub static ref BENTON_RAW_SCORE: Regex = Regex::new(
        r"^\D*raw=10\D*(average|borderline impair[a-z]+)"
    ).unwrap();

    pub static ref BENTON_DIGIT: Regex = Regex::new(r"^\D*(\d)\b").unwrap();

    pub static ref BENTON_QUALITATIVE: Regex = Regex::new(r"(average|borderline impair[a-z]+)").unwrap();

    pub static ref TRAILING_ON_THE: Regex = Regex::new(r"\s*\bon(?:\s+the)?\s*$").unwrap();

    // Mini-Cog
    pub static ref MINICOG_ACCOMPLISHED: Regex = Regex::new(r"\baccomplished\b\D*(\d/5)").unwrap();

    pub static ref MINICOG_OUT_OF: Regex = Regex::new(
        r"\bscore\D*(\d)\s+out\s+of\s*(\d)\b"
    ).unwrap();

    pub static ref MINICOG_CLOCK_RECALL: Regex = Regex::new(
        r"^\D*clock[^\d:]*:\s*(\d(?:/\d)?)\D*recall[^\d:]*:\s*(\d(?:/\d)?)\b"
    ).unwrap();

    pub static ref MINICOG_RECALL_CLOCK: Regex = Regex::new(
        r"^\D*recall[^\d:]*:\s*(\d(?:/\d)?)\D*clock[^\d:]*:\s*(\d(?:/\d)?)\b"
    ).unwrap();

    pub static ref MINICOG_REGISTRATION_RECALL: Regex = Regex::new(
        r"registration\s+(\d/3),\s*recall\s+(\d/3)"
    ).unwrap();

    pub static ref MINICOG_FOR_REGISTRATION: Regex = Regex::new(
        r"(\d/3)\s+for\s+registration,\s*(\d/3)\s+for\s+recall"
    ).unwrap();

    pub static ref ANY_FRACTION: Regex = Regex::new(r"\b(\d+/\d+)\b").unwrap();

    pub static ref DIGIT_BEFORE_ON: Regex = Regex::new(r"\b([0-5])\s*on(?:\s|$)").unwrap();

    // Result dates
    pub static ref ENCOUNTER_DAY: Regex = Regex::new(r"(?i)\b(?:today|this +am)\b").unwrap();

    pub static ref MONTH_YEAR: Regex = Regex::new(r"\b(\d{1,2})/((?:19|20)\d{2})\b").unwrap();
}
