//! Line-by-line note labeler.

use regex::Regex;
use tracing::{debug, trace};

use crate::models::{AttributeKind, Category, EhrConfig, LineSegment, Note};

use super::canonical::canonicalize;
use super::classifier::classify;
use super::patterns::*;

/// Assigns a category to each line of a note.
///
/// The labeler holds only immutable configuration. The one piece of state
/// carried between lines, the previous line's category, is passed in by
/// the caller, so labeling a line is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct SegmentLabeler {
    /// Upper-cased known section names.
    known_sections: Vec<String>,
    /// Upper-cased known names below the minimum length.
    short_sections: Vec<String>,
    min_section_name_length: usize,
}

impl SegmentLabeler {
    pub fn new(config: &EhrConfig) -> Self {
        Self {
            known_sections: config.known_sections(),
            short_sections: config.short_sections(),
            min_section_name_length: config.min_section_name_length,
        }
    }

    /// Label one line given the category of the line before it.
    ///
    /// `prev` is `None` for the first line of a note. Returns the category
    /// and the raw label: the attribute kind, the header name as written,
    /// or the classifier's category name.
    ///
    /// Rules are tried in order and the first match wins:
    /// 1. `TITLE:`, date fields, `AUTHOR:`, `STATUS:` attributes
    /// 2. signature marker, or continuation after one
    /// 3. all-caps header, subject to the minimum length
    /// 4. mixed-case header, subject to the known section list
    /// 5. content classification, inheriting an open header
    pub fn label(&self, line: &str, prev: Option<&Category>) -> (Category, String) {
        if let Some(kind) = attribute_kind(line) {
            return (Category::Attribute { kind }, kind.as_str().to_string());
        }

        let after_signature = matches!(prev, Some(Category::EndOfNote))
            && !line.contains(ORIGINAL_DOCUMENT_MARKER);
        if line.contains(SIGNATURE_MARKER) || after_signature {
            let category = Category::EndOfNote;
            let raw = category.name().to_string();
            return (category, raw);
        }

        if let Some(caps) = UPPER_HEADER.captures(line) {
            let name = collapse_spaces(&caps[1]);
            let known = name.len() >= self.min_section_name_length
                || self.short_sections.contains(&name);
            return self.header(line, name, known, &UPPER_HEADER_ONLY);
        }

        if let Some(caps) = MIXED_HEADER.captures(line) {
            let name = collapse_spaces(&caps[1]).to_uppercase();
            let known = self.known_sections.contains(&name);
            return self.header(line, name, known, &MIXED_HEADER_ONLY);
        }

        let category = classify(line);
        let raw = category.name().to_string();
        match prev {
            Some(open) if open.is_open_section()
                && matches!(category, Category::Content | Category::CheckList) =>
            {
                trace!("inherit {} -> {}", raw, open);
                (open.clone(), raw)
            }
            _ => (category, raw),
        }
    }

    fn header(
        &self,
        line: &str,
        name: String,
        known: bool,
        header_only: &Regex,
    ) -> (Category, String) {
        if !known {
            let category = classify(line);
            let raw = category.name().to_string();
            return (category, raw);
        }

        let category = Category::SectionHeader {
            name: canonicalize(&name),
            open: header_only.is_match(line),
        };
        (category, name)
    }

    /// Label every line of a note, threading each category into the next call.
    pub fn segment_note(&self, note: &Note) -> Vec<LineSegment> {
        let mut segments: Vec<LineSegment> = Vec::new();

        for (idx, line) in note.lines().enumerate() {
            let prev = segments.last().map(|s| &s.category);
            let (category, raw_label) = self.label(line, prev);
            segments.push(LineSegment {
                id: idx + 1,
                text: line.to_string(),
                category,
                raw_label,
            });
        }

        debug!("Segmented note {} into {} lines", note.id, segments.len());

        segments
    }
}

fn attribute_kind(line: &str) -> Option<AttributeKind> {
    if line.contains(TITLE_MARKER) {
        Some(AttributeKind::Title)
    } else if DATE_FIELD.is_match(&line.to_uppercase()) {
        Some(AttributeKind::Date)
    } else if line.contains(AUTHOR_MARKER) {
        Some(AttributeKind::Author)
    } else if line.contains(STATUS_MARKER) {
        Some(AttributeKind::Status)
    } else {
        None
    }
}

/// Extract the note title from a `STANDARD TITLE:` line.
pub fn extract_title(text: &str) -> Option<String> {
    STANDARD_TITLE
        .captures(text)
        .map(|caps| collapse_spaces(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionName;
    use pretty_assertions::assert_eq;

    fn labeler() -> SegmentLabeler {
        let config = EhrConfig {
            key_sections: vec![
                "HPI".to_string(),
                "Plan".to_string(),
                "Family History".to_string(),
                "Assessment".to_string(),
            ],
            min_section_name_length: 5,
            ..EhrConfig::default()
        };
        SegmentLabeler::new(&config)
    }

    fn open(name: SectionName) -> Category {
        Category::SectionHeader { name, open: true }
    }

    #[test]
    fn test_title_attribute_at_note_start() {
        let (category, raw) = labeler().label("TITLE: Discharge Summary", None);
        assert_eq!(category, Category::Attribute { kind: AttributeKind::Title });
        assert_eq!(raw, "title");
    }

    #[test]
    fn test_attribute_lines() {
        let l = labeler();
        let kind = |line: &str| match l.label(line, None).0 {
            Category::Attribute { kind } => Some(kind),
            _ => None,
        };

        assert_eq!(kind("DATE OF NOTE: 03/04/2021"), Some(AttributeKind::Date));
        assert_eq!(kind("Entry Date: 03/04/2021"), Some(AttributeKind::Date));
        assert_eq!(kind("date signed: 03/04/2021"), Some(AttributeKind::Date));
        assert_eq!(kind("AUTHOR: Smith, Jane"), Some(AttributeKind::Author));
        assert_eq!(kind("STATUS: COMPLETED"), Some(AttributeKind::Status));
        assert_eq!(kind("Author: lowercase is prose"), None);
    }

    #[test]
    fn test_end_of_note_propagates() {
        let l = labeler();
        let (sig, _) = l.label("/es/ JANE SMITH, MD", Some(&Category::Content));
        assert_eq!(sig, Category::EndOfNote);

        let (next, _) = l.label("Signed: 03/04/2021 10:15", Some(&sig));
        assert_eq!(next, Category::EndOfNote);

        let (reset, _) = l.label("--- Original Document follows ---", Some(&sig));
        assert_eq!(reset, Category::FuncLines);
    }

    #[test]
    fn test_open_header_is_inherited_by_content() {
        let l = labeler();
        let (header, raw) = l.label("FAMILY HISTORY:", None);
        assert_eq!(header, open(SectionName::FamilyHistory));
        assert_eq!(raw, "FAMILY HISTORY");

        let (content, raw) = l.label("Mother with dementia in her 70s.", Some(&header));
        assert_eq!(content, header);
        assert_eq!(raw, "content");

        let (check, _) = l.label("[x] father deceased", Some(&header));
        assert_eq!(check, header);
    }

    #[test]
    fn test_closed_header_is_not_inherited() {
        let l = labeler();
        let (header, _) = l.label("ASSESSMENT: mild cognitive impairment", None);
        assert_eq!(
            header,
            Category::SectionHeader {
                name: SectionName::AssessmentImpression,
                open: false,
            }
        );

        let (next, _) = l.label("Will follow up in clinic.", Some(&header));
        assert_eq!(next, Category::Content);
    }

    #[test]
    fn test_func_lines_do_not_inherit() {
        let l = labeler();
        let header = open(SectionName::Hpi);
        let (category, _) = l.label("-----", Some(&header));
        assert_eq!(category, Category::FuncLines);
    }

    #[test]
    fn test_short_uppercase_headers_need_allowlist() {
        let l = labeler();

        let (hpi, raw) = l.label("HPI:", None);
        assert_eq!(hpi, open(SectionName::Hpi));
        assert_eq!(raw, "HPI");

        let (bp, raw) = l.label("BP: 120/80", None);
        assert_eq!(bp, Category::FuncLines);
        assert_eq!(raw, "func_lines");

        let (pt, _) = l.label("PT: ambulating with walker", None);
        assert_eq!(pt, Category::Content);
    }

    #[test]
    fn test_uppercase_header_whitespace_is_collapsed() {
        let (category, raw) = labeler().label("  CHIEF   COMPLAINT :  memory loss", None);
        assert_eq!(
            category,
            Category::SectionHeader {
                name: SectionName::ChiefComplaint,
                open: false,
            }
        );
        assert_eq!(raw, "CHIEF COMPLAINT");
    }

    #[test]
    fn test_mixed_case_headers_need_known_section() {
        let l = labeler();

        let (plan, raw) = l.label("Plan:", None);
        assert_eq!(plan, open(SectionName::TreatmentPlan));
        assert_eq!(raw, "PLAN");

        let (history, _) = l.label("Family History: noncontributory", None);
        assert_eq!(
            history,
            Category::SectionHeader {
                name: SectionName::FamilyHistory,
                open: false,
            }
        );

        let (unknown, raw) = l.label("Patient reports: poor sleep", None);
        assert_eq!(unknown, Category::Content);
        assert_eq!(raw, "content");
    }

    #[test]
    fn test_label_is_pure() {
        let l = labeler();
        let prev = open(SectionName::Hpi);
        for line in ["Doing well today.", "HPI:", "/es/ DR", "----", "[ ] item"] {
            assert_eq!(l.label(line, Some(&prev)), l.label(line, Some(&prev)));
        }
    }

    #[test]
    fn test_segment_note() {
        let note = Note::new(
            "N1",
            "TITLE: NEUROLOGY CONSULT\nHPI:\nForgetful for two years.\nMMSE 24/30 today.\n\n/es/ JANE SMITH\nSigned 03/04/2021",
        );
        let segments = labeler().segment_note(&note);

        let labels: Vec<_> = segments.iter().map(|s| s.category.name().to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "attribute",
                "HPI",
                "HPI",
                "HPI",
                "func_lines",
                "endofnote",
                "endofnote",
            ]
        );
        assert_eq!(segments[0].id, 1);
        assert_eq!(segments[3].text, "MMSE 24/30 today.");
    }

    #[test]
    fn test_relabeling_is_idempotent() {
        let l = labeler();
        let note = Note::new("N2", "PLAN:\nReturn in 6 months\n[x] labs\nNotes here\nAUTHOR: X");
        let first = l.segment_note(&note);
        let second = l.segment_note(&note);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_title() {
        let text = "LOCAL TITLE: NEURO\nSTANDARD  TITLE:  NEUROLOGY   OUTPATIENT NOTE \nHPI:";
        assert_eq!(extract_title(text), Some("NEUROLOGY OUTPATIENT NOTE".to_string()));
        assert_eq!(extract_title("no title here"), None);
    }
}
