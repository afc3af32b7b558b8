//! Mapping of raw section header names to canonical section names.

use crate::models::SectionName;

/// Map a header name to its canonical section.
///
/// Keywords are tried in a fixed order and the first hit wins, so
/// "FAMILY HISTORY OF DIAGNOSES" resolves through the FAMILY rules before
/// DIAGNOSES or HISTORY are considered. A FAMILY header that is neither
/// history nor education stays as written.
pub fn canonicalize(raw: &str) -> SectionName {
    let name = raw.to_uppercase();
    let has = |keyword: &str| name.contains(keyword);

    if has("FAMILY") {
        return if has("HISTORY") || has("HX") {
            SectionName::FamilyHistory
        } else if has("EDUCATION") {
            SectionName::FamilyEducation
        } else {
            SectionName::Other(raw.to_string())
        };
    }

    if has("ASSESS") || has("IMPRESSION") || has("ASESSMENT") {
        SectionName::AssessmentImpression
    } else if has("CHIEF COMPLAIN") {
        SectionName::ChiefComplaint
    } else if has("MEDICINE") || has("MEDICATION") {
        SectionName::Medicine
    } else if has("ACTIVE PROBLEM") {
        SectionName::ActiveProblem
    } else if has("DIAGNOSES") || has("DIAGNOSIS") {
        SectionName::Diagnoses
    } else if has("HISTORY") || has("PMH") {
        SectionName::PastMedicalHistory
    } else if has("PLAN") {
        SectionName::TreatmentPlan
    } else if has("ALLERG") {
        SectionName::Allergies
    } else if has("HPI") {
        SectionName::Hpi
    } else {
        SectionName::Other(raw.to_string())
    }
}
