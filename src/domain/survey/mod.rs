//! Survey module - questions, answers and trait scoring.
//!
//! - `Question` / `Choice` - the static survey corpus
//! - `QuestionCatalog` - id lookup over an ordered question list, plus the built-in survey
//! - `Answer` - one `(question id, choice key)` pair supplied by a respondent
//! - `SurveyScorer` - folds answers into a single trait vector

mod answer;
mod catalog;
mod question;
mod scoring;

pub use answer::Answer;
pub use catalog::QuestionCatalog;
pub use question::{Choice, Question, QuestionCategory};
pub use scoring::{ScoringOutcome, SurveyScorer};
