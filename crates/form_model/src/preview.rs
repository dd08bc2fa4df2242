//! Preview projection of the form.

use crate::date::format_submission_date;
use crate::field::{FieldKey, FieldSet};

/// The human-readable rendition of a [`FieldSet`]: one display string per
/// field. A pure function of the form state, recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// The title line: effective course code plus the `" REPORT"` suffix.
    pub title: String,
    pub student_name: String,
    pub student_id: String,
    pub exp_no: String,
    pub submitted_to: String,
    pub course_name: String,
    pub section: String,
    pub semester: String,
    /// Submission date formatted `DD-MM-YYYY`.
    pub submission_date: String,
}

impl DisplaySnapshot {
    pub fn render(fields: &FieldSet) -> Self {
        Self {
            title: fields.title(),
            student_name: fields.effective(FieldKey::StudentName).to_string(),
            student_id: fields.effective(FieldKey::StudentId).to_string(),
            exp_no: fields.effective(FieldKey::ExpNo).to_string(),
            submitted_to: fields.effective(FieldKey::SubmittedTo).to_string(),
            course_name: fields.effective(FieldKey::CourseName).to_string(),
            section: fields.effective(FieldKey::Section).to_string(),
            semester: fields.effective(FieldKey::Semester).to_string(),
            submission_date: format_submission_date(fields.get(FieldKey::SubmissionDate)),
        }
    }

    /// The labelled detail lines in cover-page order, excluding the title.
    pub fn detail_lines(&self) -> Vec<(FieldKey, String)> {
        vec![
            (FieldKey::StudentName, self.student_name.clone()),
            (FieldKey::StudentId, self.student_id.clone()),
            (FieldKey::ExpNo, self.exp_no.clone()),
            (FieldKey::SubmittedTo, self.submitted_to.clone()),
            (FieldKey::CourseName, self.course_name.clone()),
            (FieldKey::Section, self.section.clone()),
            (FieldKey::Semester, self.semester.clone()),
            (FieldKey::SubmissionDate, self.submission_date.clone()),
        ]
    }
}
