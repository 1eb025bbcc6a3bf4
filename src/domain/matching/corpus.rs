//! Dam corpus - the ordered, immutable collection matched against.

use std::collections::HashMap;

use super::Dam;

/// Ordered collection of dams, frozen after construction.
///
/// Order is significant: it is the tie-break key when ranking.
#[derive(Debug, Clone, Default)]
pub struct DamCorpus {
    dams: Vec<Dam>,
    index: HashMap<String, usize>,
}

impl DamCorpus {
    /// Creates a corpus. When ids repeat, lookup by id returns the first entry.
    pub fn new(dams: Vec<Dam>) -> Self {
        let mut index = HashMap::with_capacity(dams.len());
        for (i, dam) in dams.iter().enumerate() {
            index.entry(dam.id.to_string()).or_insert(i);
        }
        Self { dams, index }
    }

    pub fn dams(&self) -> &[Dam] {
        &self.dams
    }

    pub fn len(&self) -> usize {
        self.dams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dams.is_empty()
    }

    /// Finds a dam by id.
    pub fn get(&self, id: &str) -> Option<&Dam> {
        self.index.get(id).map(|&i| &self.dams[i])
    }

    /// Number of ids that appear more than once.
    pub fn duplicate_ids(&self) -> usize {
        self.dams.len() - self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DamId;
    use crate::domain::traits::TraitVector;

    fn dam(id: &str, name: &str) -> Dam {
        Dam::new(DamId::new(id).unwrap(), name, TraitVector::default())
    }

    #[test]
    fn get_finds_dam_by_id() {
        let corpus = DamCorpus::new(vec![dam("d1", "一"), dam("d2", "二")]);
        assert_eq!(corpus.get("d2").unwrap().name_ja, "二");
        assert!(corpus.get("d3").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_entry() {
        let corpus = DamCorpus::new(vec![dam("d1", "first"), dam("d1", "second")]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("d1").unwrap().name_ja, "first");
        assert_eq!(corpus.duplicate_ids(), 1);
    }

    #[test]
    fn default_corpus_is_empty() {
        assert!(DamCorpus::default().is_empty());
    }
}
