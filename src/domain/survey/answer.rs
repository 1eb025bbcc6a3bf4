//! Survey answer reference.

/// A respondent's pick: which choice was selected for which question.
///
/// Both fields are plain strings; references that do not resolve against
/// the catalog are skipped during scoring rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer {
    pub question_id: String,
    pub choice_key: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, choice_key: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            choice_key: choice_key.into(),
        }
    }
}
