//! Configuration structures for the segmentation and extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CogxError, ConfigError};

/// Default number of tokens in a context window.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Main configuration for the cogx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CogxConfig {
    /// Note segmentation configuration.
    pub ehr: EhrConfig,

    /// Test result extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Note segmentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EhrConfig {
    /// Known section names, in the order they were configured.
    pub key_sections: Vec<String>,

    /// Header names shorter than this must appear in `key_sections`.
    pub min_section_name_length: usize,

    /// Aliases for first-degree relatives (masked as "family member").
    pub family_members_first_degree: Vec<String>,

    /// Aliases for other relatives (prefixed with "family member").
    pub family_members_other: Vec<String>,
}

impl Default for EhrConfig {
    fn default() -> Self {
        Self {
            key_sections: to_strings(&[
                "HPI",
                "PMH",
                "Plan",
                "ROS",
                "Exam",
                "Chief Complaint",
                "History of Present Illness",
                "Past Medical History",
                "Family History",
                "Social History",
                "Medications",
                "Allergies",
                "Active Problems",
                "Diagnoses",
                "Assessment",
                "Impression",
                "Assessment and Plan",
                "Treatment Plan",
            ]),
            min_section_name_length: 5,
            family_members_first_degree: to_strings(&[
                "mother", "father", "brother", "sister", "son", "daughter", "parent", "sibling",
            ]),
            family_members_other: to_strings(&[
                "aunt",
                "uncle",
                "cousin",
                "grandmother",
                "grandfather",
                "niece",
                "nephew",
            ]),
        }
    }
}

/// Aliases for a single cognitive test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAliases {
    /// Test name as used in output columns (e.g. "MMSE").
    pub name: String,

    /// Surface forms that mention the test.
    pub aliases: Vec<String>,
}

impl TestAliases {
    pub fn new(name: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            aliases: to_strings(aliases),
        }
    }
}

/// Test result extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Configured tests, in configuration order.
    pub tests: Vec<TestAliases>,

    /// Number of tokens searched on either side of a test mention.
    pub window_size: usize,

    /// Resolve a date for each result instead of leaving it N/A.
    pub resolve_dates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            tests: vec![
                TestAliases::new(
                    "MMSE",
                    &[
                        "mmse",
                        "mini mental state exam",
                        "mini-mental state exam",
                        "mini mental state examination",
                        "mini-mental state examination",
                        "folstein",
                    ],
                ),
                TestAliases::new("MoCA", &["moca", "montreal cognitive assessment"]),
                TestAliases::new(
                    "SLUMS",
                    &[
                        "slums",
                        "saint louis university mental status",
                        "st. louis university mental status",
                    ],
                ),
                TestAliases::new("MINICOG", &["minicog", "mini-cog", "mini cog"]),
                TestAliases::new("BNT", &["bnt", "boston naming test", "boston naming"]),
                TestAliases::new("BENTON", &["benton", "bvrt", "benton visual retention test"]),
            ],
            window_size: DEFAULT_WINDOW_SIZE,
            resolve_dates: false,
        }
    }
}

impl ExtractionConfig {
    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::InvalidWindowSize);
        }
        for test in &self.tests {
            if test.aliases.iter().all(|a| a.trim().is_empty()) {
                return Err(ConfigError::EmptyAliases {
                    test: test.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse the line-oriented `test: alias, alias` format.
    ///
    /// Every key other than `window_size` names a test.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self {
            tests: Vec::new(),
            ..Self::default()
        };
        for entry in parse_entries(text)? {
            config.apply(&entry)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, entry: &Entry) -> Result<(), ConfigError> {
        match entry.key.as_str() {
            "window_size" => self.window_size = entry.number()?,
            "resolve_dates" => self.resolve_dates = entry.flag()?,
            _ => {
                let aliases = entry.list().iter().map(|a| a.to_lowercase()).collect();
                self.tests.push(TestAliases {
                    name: entry.key.clone(),
                    aliases,
                });
            }
        }
        Ok(())
    }
}

impl EhrConfig {
    /// Parse the line-oriented `key: value` format. Unknown keys are ignored.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for entry in parse_entries(text)? {
            config.apply(&entry)?;
        }
        Ok(config)
    }

    /// Returns `false` when the key is not a segmentation setting.
    fn apply(&mut self, entry: &Entry) -> Result<bool, ConfigError> {
        match entry.key.as_str() {
            "key_sections" => self.key_sections = entry.list(),
            "family_members_fh" => self.family_members_first_degree = entry.list(),
            "family_members_oth" => self.family_members_other = entry.list(),
            key if key.contains("length") => self.min_section_name_length = entry.number()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Section names, upper-cased.
    pub fn known_sections(&self) -> Vec<String> {
        self.key_sections.iter().map(|s| s.to_uppercase()).collect()
    }

    /// Upper-cased section names shorter than the minimum length.
    pub fn short_sections(&self) -> Vec<String> {
        self.key_sections
            .iter()
            .filter(|s| s.len() < self.min_section_name_length)
            .map(|s| s.to_uppercase())
            .collect()
    }
}

impl CogxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CogxError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Load configuration, choosing the format from the file extension.
    ///
    /// `.json` files are read with serde; anything else is treated as the
    /// line-oriented format holding both segmentation and test keys.
    pub fn load(path: &Path) -> Result<Self, CogxError> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_file(path)
        } else {
            let content = std::fs::read_to_string(path)?;
            Ok(Self::from_text(&content)?)
        }
    }

    /// Parse a combined line-oriented config.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let mut ehr = EhrConfig::default();
        let mut extraction = ExtractionConfig {
            tests: Vec::new(),
            ..ExtractionConfig::default()
        };

        for entry in parse_entries(text)? {
            if !ehr.apply(&entry)? {
                extraction.apply(&entry)?;
            }
        }

        if extraction.tests.is_empty() {
            extraction.tests = ExtractionConfig::default().tests;
        }
        extraction.validate()?;

        Ok(Self { ehr, extraction })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), CogxError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// One `key: value` line of a text config.
struct Entry {
    key: String,
    value: String,
}

impl Entry {
    fn number(&self) -> Result<usize, ConfigError> {
        self.value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                key: self.key.clone(),
                value: self.value.clone(),
            })
    }

    fn flag(&self) -> Result<bool, ConfigError> {
        match self.value.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidFlag {
                key: self.key.clone(),
                value: self.value.clone(),
            }),
        }
    }

    fn list(&self) -> Vec<String> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    }
}

fn parse_entries(text: &str) -> Result<Vec<Entry>, ConfigError> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        if raw.starts_with('#') || raw.trim().is_empty() {
            continue;
        }

        let (key, value) = raw
            .split_once(':')
            .ok_or_else(|| ConfigError::MissingDelimiter {
                line: idx + 1,
                content: raw.to_string(),
            })?;

        entries.push(Entry {
            key: key.trim().to_string(),
            value: value.to_string(),
        });
    }

    Ok(entries)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
