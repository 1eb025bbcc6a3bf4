//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It owns the process-wide dam corpus through [`DamCatalog`].

mod dam_catalog;
pub mod handlers;

pub use dam_catalog::DamCatalog;
pub use handlers::{
    DamDetail, DamMatch, DiagnoseCommand, DiagnoseHandler, Diagnosis, GetDamDetailHandler,
    GetDamDetailQuery, ListQuestionsHandler, ListQuestionsQuery,
};
