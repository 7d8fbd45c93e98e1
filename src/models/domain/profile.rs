use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A subject extracted from an uploaded syllabus.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Subject {
    pub subject: String,
    pub code: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Theory,
    Practical,
}

/// Per-subject topic breakdown, keyed by the subject `code`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct SmtDetail {
    pub code: String,
    pub topics: Vec<String>,
}

/// The payload the syllabus-extraction collaborator returns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct SyllabusData {
    pub subjects: Vec<Subject>,
    pub smt_details: Vec<SmtDetail>,
}

/// Durable per-user profile record. `subjects` and `smt_details` grow as
/// syllabi are uploaded; the rest is captured on account setup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub smt_details: Vec<SmtDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_proficiency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub learning_challenges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(user_id: &str, first_name: &str, last_name: &str) -> Self {
        Profile {
            user_id: user_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            subjects: Vec::new(),
            smt_details: Vec::new(),
            grade: None,
            tech_proficiency: None,
            learning_style: None,
            learning_challenges: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    /// Topics stored for the given subject code, if any.
    pub fn topics_for(&self, code: &str) -> Option<&[String]> {
        self.smt_details
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.topics.as_slice())
    }

    /// Merges freshly extracted syllabus data into this profile. An incoming
    /// entry whose `code` already exists locally is dropped before the merge;
    /// stored entries are never overwritten.
    pub fn merge_syllabus(&mut self, data: SyllabusData) {
        let existing_subject_codes: HashSet<String> =
            self.subjects.iter().map(|s| s.code.clone()).collect();
        self.subjects.extend(
            data.subjects
                .into_iter()
                .filter(|s| !existing_subject_codes.contains(&s.code)),
        );

        let existing_detail_codes: HashSet<String> =
            self.smt_details.iter().map(|d| d.code.clone()).collect();
        self.smt_details.extend(
            data.smt_details
                .into_iter()
                .filter(|d| !existing_detail_codes.contains(&d.code)),
        );
    }
}
