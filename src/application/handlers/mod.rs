//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod diagnosis;

pub use diagnosis::{
    DamDetail, DamMatch, DiagnoseCommand, DiagnoseHandler, Diagnosis, GetDamDetailHandler,
    GetDamDetailQuery, ListQuestionsHandler, ListQuestionsQuery,
};
