//! Dam Matcher - ranks the corpus by similarity to a query vector.

use std::cmp::Ordering;

use super::{cosine_similarity, Dam, DamCorpus, MatchError};
use crate::domain::foundation::MatchRate;
use crate::domain::traits::TraitVector;

/// Default number of runner-up matches.
pub const DEFAULT_SECONDARY_COUNT: usize = 2;

/// One dam with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDam<'a> {
    pub dam: &'a Dam,
    /// Position in the corpus, used as tie-break.
    pub corpus_index: usize,
    pub similarity: f64,
}

impl ScoredDam<'_> {
    pub fn match_rate(&self) -> MatchRate {
        MatchRate::from_similarity(self.similarity)
    }
}

/// Primary and secondary matches for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub primary: ScoredDam<'a>,
    pub secondaries: Vec<ScoredDam<'a>>,
}

/// Ranks dams by descending cosine similarity.
#[derive(Debug, Clone, Copy)]
pub struct DamMatcher {
    secondary_count: usize,
}

impl DamMatcher {
    pub fn new(secondary_count: usize) -> Self {
        Self { secondary_count }
    }

    /// Ranks every dam in the corpus.
    ///
    /// Sorted by similarity descending, then by corpus index ascending, so
    /// equal scores keep corpus order.
    pub fn rank<'a>(&self, query: &TraitVector, corpus: &'a DamCorpus) -> Vec<ScoredDam<'a>> {
        let mut scored: Vec<ScoredDam<'a>> = corpus
            .dams()
            .iter()
            .enumerate()
            .map(|(corpus_index, dam)| ScoredDam {
                dam,
                corpus_index,
                similarity: cosine_similarity(query, &dam.traits),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then(a.corpus_index.cmp(&b.corpus_index))
        });
        scored
    }

    /// Finds the best match and up to `secondary_count` runners-up.
    pub fn find_matches<'a>(
        &self,
        query: &TraitVector,
        corpus: &'a DamCorpus,
    ) -> Result<MatchResult<'a>, MatchError> {
        let mut ranked = self.rank(query, corpus).into_iter();
        let primary = ranked.next().ok_or(MatchError::EmptyCorpus)?;
        let secondaries = ranked.take(self.secondary_count).collect();
        Ok(MatchResult {
            primary,
            secondaries,
        })
    }
}

impl Default for DamMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDARY_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DamId;

    fn dam(id: &str, traits: [f64; 6]) -> Dam {
        Dam::new(
            DamId::new(id).unwrap(),
            id,
            TraitVector::from_array(traits).unwrap(),
        )
    }

    fn ids(scored: &[ScoredDam<'_>]) -> Vec<String> {
        scored.iter().map(|s| s.dam.id.to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let corpus = DamCorpus::default();
        let result = DamMatcher::default().find_matches(&TraitVector::default(), &corpus);
        assert_eq!(result.unwrap_err(), MatchError::EmptyCorpus);
    }

    #[test]
    fn single_dam_is_primary_with_no_secondaries() {
        let corpus = DamCorpus::new(vec![dam("only", [10.0, 90.0, 10.0, 90.0, 10.0, 90.0])]);
        let result = DamMatcher::default()
            .find_matches(&TraitVector::default(), &corpus)
            .unwrap();
        assert_eq!(result.primary.dam.id.as_str(), "only");
        assert!(result.secondaries.is_empty());
    }

    #[test]
    fn ranks_by_descending_similarity() {
        let query = TraitVector::from_array([90.0, 10.0, 10.0, 10.0, 10.0, 10.0]).unwrap();
        let corpus = DamCorpus::new(vec![
            dam("far", [10.0, 90.0, 10.0, 10.0, 10.0, 10.0]),
            dam("near", [85.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
            dam("mid", [50.0, 50.0, 10.0, 10.0, 10.0, 10.0]),
        ]);
        let ranked = DamMatcher::default().rank(&query, &corpus);
        assert_eq!(ids(&ranked), vec!["near", "mid", "far"]);
    }

    #[test]
    fn exact_match_has_full_match_rate() {
        let traits = [70.0, 50.0, 50.0, 30.0, 70.0, 70.0];
        let corpus = DamCorpus::new(vec![dam("twin", traits)]);
        let query = TraitVector::from_array(traits).unwrap();
        let result = DamMatcher::default().find_matches(&query, &corpus).unwrap();
        assert_eq!(result.primary.match_rate(), MatchRate::HUNDRED);
    }

    #[test]
    fn ties_preserve_corpus_order() {
        let same = [40.0, 60.0, 40.0, 60.0, 40.0, 60.0];
        let corpus = DamCorpus::new(vec![
            dam("a", same),
            dam("b", same),
            dam("c", same),
            dam("d", same),
        ]);
        let result = DamMatcher::new(3)
            .find_matches(&TraitVector::default(), &corpus)
            .unwrap();
        assert_eq!(result.primary.dam.id.as_str(), "a");
        assert_eq!(ids(&result.secondaries), vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_vector_dams_rank_last_with_zero_similarity() {
        let corpus = DamCorpus::new(vec![
            dam("zero", [0.0; 6]),
            dam("real", [40.0, 60.0, 40.0, 60.0, 40.0, 60.0]),
        ]);
        let ranked = DamMatcher::default().rank(&TraitVector::default(), &corpus);
        assert_eq!(ids(&ranked), vec!["real", "zero"]);
        assert_eq!(ranked[1].similarity, 0.0);
    }

    #[test]
    fn secondary_count_limits_runners_up() {
        let corpus = DamCorpus::new(
            (0..10)
                .map(|i| dam(&format!("d{}", i), [10.0 * i as f64, 50.0, 50.0, 50.0, 50.0, 50.0]))
                .collect(),
        );
        let query = TraitVector::default();

        let two = DamMatcher::default().find_matches(&query, &corpus).unwrap();
        assert_eq!(two.secondaries.len(), 2);

        let none = DamMatcher::new(0).find_matches(&query, &corpus).unwrap();
        assert!(none.secondaries.is_empty());

        let many = DamMatcher::new(50).find_matches(&query, &corpus).unwrap();
        assert_eq!(many.secondaries.len(), 9);
    }

    #[test]
    fn primary_is_rank_one_and_secondaries_follow() {
        let corpus = DamCorpus::new(
            (0..6)
                .map(|i| dam(&format!("d{}", i), [100.0 - 15.0 * i as f64, 50.0, 50.0, 50.0, 50.0, 50.0]))
                .collect(),
        );
        let query = TraitVector::from_array([100.0, 50.0, 50.0, 50.0, 50.0, 50.0]).unwrap();
        let ranked = DamMatcher::default().rank(&query, &corpus);
        let result = DamMatcher::default().find_matches(&query, &corpus).unwrap();

        assert_eq!(result.primary, ranked[0]);
        assert_eq!(result.secondaries, ranked[1..3].to_vec());
    }
}
