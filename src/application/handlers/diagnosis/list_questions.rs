//! ListQuestionsHandler - Query handler for the survey questions.

use std::sync::Arc;

use crate::domain::survey::{Question, QuestionCatalog};

/// Query for every survey question in presentation order.
#[derive(Debug, Clone, Default)]
pub struct ListQuestionsQuery;

/// Handler for listing questions.
pub struct ListQuestionsHandler {
    catalog: Arc<QuestionCatalog>,
}

impl ListQuestionsHandler {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, _query: ListQuestionsQuery) -> Vec<Question> {
        self.catalog.questions().to_vec()
    }
}
