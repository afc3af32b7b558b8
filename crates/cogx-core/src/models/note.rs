//! Note, segment and result data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder written for a missing value or date.
pub const NOT_AVAILABLE: &str = "N/A";

/// A clinical note as supplied by the pipeline driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note identifier from the source data.
    pub id: String,

    /// Raw note text.
    pub text: String,
}

impl Note {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Lines of the note with any trailing `\r` removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

/// One labeled line of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    /// One-based line index within the note.
    pub id: usize,

    /// Raw line text.
    pub text: String,

    /// Assigned category.
    pub category: Category,

    /// Raw label (header name or classifier category).
    pub raw_label: String,
}

/// Kind of note attribute line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Title,
    Date,
    Author,
    Status,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Title => "title",
            AttributeKind::Date => "date",
            AttributeKind::Author => "author",
            AttributeKind::Status => "note_status",
        }
    }
}

/// Canonical section name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    FamilyHistory,
    FamilyEducation,
    AssessmentImpression,
    ChiefComplaint,
    Medicine,
    ActiveProblem,
    Diagnoses,
    PastMedicalHistory,
    TreatmentPlan,
    Allergies,
    Hpi,
    /// Header name that matched no canonical keyword, kept verbatim.
    Other(String),
}

impl SectionName {
    pub fn as_str(&self) -> &str {
        match self {
            SectionName::FamilyHistory => "FAMILY HISTORY",
            SectionName::FamilyEducation => "FAMILY EDU",
            SectionName::AssessmentImpression => "ASSESSMENT/IMPRESSION",
            SectionName::ChiefComplaint => "CHIEF COMPLAIN",
            SectionName::Medicine => "MEDICINE",
            SectionName::ActiveProblem => "ACTIVE PROBLEM",
            SectionName::Diagnoses => "DIAGNOSES",
            SectionName::PastMedicalHistory => "PMH",
            SectionName::TreatmentPlan => "TREATMENT PLAN",
            SectionName::Allergies => "ALLERGIES",
            SectionName::Hpi => "HPI",
            SectionName::Other(name) => name,
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category assigned to a note line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Category {
    /// Note metadata line (title, date, author, status).
    Attribute { kind: AttributeKind },

    /// Section header. An open header has no content on its own line and
    /// carries over to the prose lines that follow it.
    SectionHeader { name: SectionName, open: bool },

    /// Free prose.
    Content,

    /// Decorative or non-prose line.
    FuncLines,

    /// Checkbox line.
    CheckList,

    /// Medication list preamble.
    MedicationList,

    /// Signature block and everything after it.
    EndOfNote,
}

impl Category {
    /// Whether this is a header whose category carries to following lines.
    pub fn is_open_section(&self) -> bool {
        matches!(self, Category::SectionHeader { open: true, .. })
    }

    /// Lines in these categories hold no clinical prose.
    pub fn is_metadata(&self) -> bool {
        matches!(self, Category::Attribute { .. } | Category::EndOfNote)
    }

    /// Short name used in output columns.
    pub fn name(&self) -> &str {
        match self {
            Category::Attribute { .. } => "attribute",
            Category::SectionHeader { name, .. } => name.as_str(),
            Category::Content => "content",
            Category::FuncLines => "func_lines",
            Category::CheckList => "check_list",
            Category::MedicationList => "medication_list",
            Category::EndOfNote => "endofnote",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed test score and the date it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Score or qualitative result; `None` when not available.
    pub value: Option<String>,

    /// Date of the result; `None` when not available.
    pub date: Option<String>,
}

impl TestResult {
    /// A result with a value and no date.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            date: None,
        }
    }

    /// The result returned when a segment does not mention the test.
    pub fn not_available() -> Self {
        Self {
            value: None,
            date: None,
        }
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    /// True for the (N/A, N/A) sentinel.
    pub fn is_not_available(&self) -> bool {
        self.value.is_none() && self.date.is_none()
    }

    pub fn value_or_na(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn date_or_na(&self) -> &str {
        self.date.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value_or_na(), self.date_or_na())
    }
}
