//! Field keys, the field set, and the effective-value fallback rule.

use crate::error::FieldKeyParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine cover-page fields.
///
/// The key set is closed: code addresses fields through this enum, so a
/// missing or misspelled key is unrepresentable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    CourseCode,
    StudentName,
    StudentId,
    ExpNo,
    SubmittedTo,
    CourseName,
    Section,
    Semester,
    SubmissionDate,
}

impl FieldKey {
    /// All keys, in cover-page order.
    pub const ALL: [FieldKey; 9] = [
        FieldKey::CourseCode,
        FieldKey::StudentName,
        FieldKey::StudentId,
        FieldKey::ExpNo,
        FieldKey::SubmittedTo,
        FieldKey::CourseName,
        FieldKey::Section,
        FieldKey::Semester,
        FieldKey::SubmissionDate,
    ];

    /// The camelCase name used in the persisted snapshot and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::CourseCode => "courseCode",
            FieldKey::StudentName => "studentName",
            FieldKey::StudentId => "studentId",
            FieldKey::ExpNo => "expNo",
            FieldKey::SubmittedTo => "submittedTo",
            FieldKey::CourseName => "courseName",
            FieldKey::Section => "section",
            FieldKey::Semester => "semester",
            FieldKey::SubmissionDate => "submissionDate",
        }
    }

    /// The label printed before the field value on the cover page.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::CourseCode => "Course Code",
            FieldKey::StudentName => "Submitted By",
            FieldKey::StudentId => "ID",
            FieldKey::ExpNo => "Experiment No",
            FieldKey::SubmittedTo => "Submitted To",
            FieldKey::CourseName => "Course name",
            FieldKey::Section => "Section",
            FieldKey::Semester => "Semester",
            FieldKey::SubmissionDate => "Date of Submission",
        }
    }

    /// The value an empty field resolves to.
    pub fn default_value(&self) -> &'static str {
        match self {
            FieldKey::CourseCode => "CHE203L",
            FieldKey::StudentName => "Sadia Islam",
            FieldKey::StudentId => "2322979647",
            FieldKey::ExpNo => "4",
            FieldKey::SubmittedTo => "Md Istiak Hossain (MIO)",
            FieldKey::CourseName => "Chemistry of Biomolecules Lab",
            FieldKey::Section => "4",
            FieldKey::Semester => "Summer 25",
            FieldKey::SubmissionDate => "2025-08-17",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| FieldKeyParseError(s.to_string()))
    }
}

/// The raw form values, one string per [`FieldKey`].
///
/// Every field always holds a string; an empty string means "never set" and
/// resolves through [`FieldSet::effective`]. The serde shape of this struct
/// is the persisted snapshot shape (nine camelCase string keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSet {
    pub course_code: String,
    pub student_name: String,
    pub student_id: String,
    pub exp_no: String,
    pub submitted_to: String,
    pub course_name: String,
    pub section: String,
    pub semester: String,
    pub submission_date: String,
}

impl FieldSet {
    /// The raw value of a field; empty if never set.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::CourseCode => &self.course_code,
            FieldKey::StudentName => &self.student_name,
            FieldKey::StudentId => &self.student_id,
            FieldKey::ExpNo => &self.exp_no,
            FieldKey::SubmittedTo => &self.submitted_to,
            FieldKey::CourseName => &self.course_name,
            FieldKey::Section => &self.section,
            FieldKey::Semester => &self.semester,
            FieldKey::SubmissionDate => &self.submission_date,
        }
    }

    /// Overwrite the raw value of a field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::CourseCode => &mut self.course_code,
            FieldKey::StudentName => &mut self.student_name,
            FieldKey::StudentId => &mut self.student_id,
            FieldKey::ExpNo => &mut self.exp_no,
            FieldKey::SubmittedTo => &mut self.submitted_to,
            FieldKey::CourseName => &mut self.course_name,
            FieldKey::Section => &mut self.section,
            FieldKey::Semester => &mut self.semester,
            FieldKey::SubmissionDate => &mut self.submission_date,
        };
        *slot = value.into();
    }

    /// The raw value when non-empty, else the built-in default for the key.
    pub fn effective(&self, key: FieldKey) -> &str {
        let raw = self.get(key);
        if raw.is_empty() {
            key.default_value()
        } else {
            raw
        }
    }

    /// The cover-page title: the effective course code with the literal
    /// `" REPORT"` suffix. The suffix exists only in this projection; the
    /// course code itself stays unsuffixed everywhere else.
    pub fn title(&self) -> String {
        format!("{} REPORT", self.effective(FieldKey::CourseCode))
    }

    /// File stem for exported artifacts; exporters append `.pdf` / `.jpg`.
    pub fn export_file_stem(&self) -> String {
        format!(
            "Cover - {} - Lab {}",
            self.effective(FieldKey::CourseName),
            self.effective(FieldKey::ExpNo)
        )
    }
}
