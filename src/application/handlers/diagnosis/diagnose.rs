//! DiagnoseHandler - Command handler for a full personality diagnosis.
//!
//! Scores the answers, derives the type tags, and ranks the dam corpus
//! against the resulting trait vector.

use std::sync::Arc;

use tracing::debug;

use crate::application::DamCatalog;
use crate::domain::foundation::{DomainError, MatchRate};
use crate::domain::matching::{Dam, DamMatcher, ScoredDam};
use crate::domain::survey::{Answer, QuestionCatalog, SurveyScorer};
use crate::domain::tags::{TagClassifier, TypeTag};
use crate::domain::traits::TraitVector;

/// Command to diagnose one completed (or partial) questionnaire.
#[derive(Debug, Clone, Default)]
pub struct DiagnoseCommand {
    pub answers: Vec<Answer>,
}

/// A matched dam, detached from the shared corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct DamMatch {
    pub dam: Dam,
    pub similarity: f64,
    pub match_rate: MatchRate,
}

impl From<ScoredDam<'_>> for DamMatch {
    fn from(scored: ScoredDam<'_>) -> Self {
        Self {
            match_rate: scored.match_rate(),
            similarity: scored.similarity,
            dam: scored.dam.clone(),
        }
    }
}

/// Result of a diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub traits: TraitVector,
    pub tags: Vec<TypeTag>,
    pub primary: DamMatch,
    pub secondaries: Vec<DamMatch>,
}

/// Handler for diagnosis commands.
pub struct DiagnoseHandler {
    questions: Arc<QuestionCatalog>,
    dams: Arc<DamCatalog>,
    matcher: DamMatcher,
}

impl DiagnoseHandler {
    pub fn new(questions: Arc<QuestionCatalog>, dams: Arc<DamCatalog>, matcher: DamMatcher) -> Self {
        Self {
            questions,
            dams,
            matcher,
        }
    }

    /// Runs scoring, tagging and matching.
    ///
    /// # Errors
    ///
    /// - `CORPUS_UNAVAILABLE` if the dam corpus cannot be loaded
    /// - `EMPTY_CORPUS` if the loaded corpus has no dams
    pub async fn handle(&self, cmd: DiagnoseCommand) -> Result<Diagnosis, DomainError> {
        let outcome = SurveyScorer::score_detailed(&self.questions, &cmd.answers);
        if !outcome.skipped.is_empty() {
            debug!(
                skipped = outcome.skipped.len(),
                applied = outcome.applied,
                "Ignoring answers with unknown question or choice"
            );
        }

        let traits = outcome.traits;
        let tags = TagClassifier::classify(&traits);

        let corpus = self.dams.corpus().await?;
        let result = self.matcher.find_matches(&traits, &corpus)?;

        Ok(Diagnosis {
            traits,
            tags,
            primary: result.primary.into(),
            secondaries: result.secondaries.into_iter().map(DamMatch::from).collect(),
        })
    }
}
