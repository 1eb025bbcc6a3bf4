//! Diagnosis application handlers.
//!
//! Command and query handlers for the questionnaire, the diagnosis itself,
//! and dam lookups.

mod diagnose;
mod get_dam_detail;
mod list_questions;

pub use diagnose::{DamMatch, DiagnoseCommand, DiagnoseHandler, Diagnosis};
pub use get_dam_detail::{DamDetail, GetDamDetailHandler, GetDamDetailQuery};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery};
