//! Survey Scorer - reduces an answer sequence to one trait vector.

use super::{Answer, QuestionCatalog};
use crate::domain::traits::{RawTraits, TraitVector};

/// Result of scoring, with bookkeeping about which answers were used.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutcome {
    pub traits: TraitVector,
    /// Number of answers that resolved and contributed a delta.
    pub applied: usize,
    /// Answers whose question or choice did not resolve.
    pub skipped: Vec<Answer>,
}

/// Stateless scorer over a question catalog.
pub struct SurveyScorer;

impl SurveyScorer {
    /// Scores answers, returning only the final vector.
    pub fn score(catalog: &QuestionCatalog, answers: &[Answer]) -> TraitVector {
        Self::score_detailed(catalog, answers).traits
    }

    /// Scores answers starting from the neutral vector.
    ///
    /// Deltas are summed unclamped and the sum is clamped exactly once, so the
    /// result does not depend on answer order. Unresolvable references are
    /// skipped. Repeated answers count every time.
    pub fn score_detailed(catalog: &QuestionCatalog, answers: &[Answer]) -> ScoringOutcome {
        let mut acc = RawTraits::default();
        let mut applied = 0;
        let mut skipped = Vec::new();

        for answer in answers {
            match catalog.resolve(&answer.question_id, &answer.choice_key) {
                Some(choice) => {
                    acc.add(&choice.effects);
                    applied += 1;
                }
                None => skipped.push(answer.clone()),
            }
        }

        ScoringOutcome {
            traits: acc.clamp(),
            applied,
            skipped,
        }
    }
}
