//! Integration tests for loading the shipped dam corpus.
//!
//! These tests verify:
//! 1. `data/dams.json` parses into validated dams with unique ids
//! 2. The catalog loads it once and serves lookups
//! 3. A diagnosis against the real corpus produces a full result

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use dambti::adapters::FileDamSource;
use dambti::application::{DamCatalog, DiagnoseCommand, DiagnoseHandler};
use dambti::domain::matching::DamMatcher;
use dambti::domain::survey::{Answer, QuestionCatalog};
use dambti::domain::traits::TraitDimension;
use dambti::ports::DamSource;

fn corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/dams.json")
}

#[tokio::test]
async fn shipped_corpus_parses() {
    let dams = FileDamSource::new(corpus_path()).load_all().await.unwrap();

    assert!(dams.len() >= 10);
    let ids: HashSet<&str> = dams.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), dams.len(), "dam ids must be unique");

    for dam in &dams {
        for dim in TraitDimension::ALL {
            let value = dam.traits.get(dim);
            assert!((0.0..=100.0).contains(&value), "{} {} = {}", dam.id, dim, value);
        }
    }
}

#[tokio::test]
async fn catalog_serves_lookups_from_shipped_corpus() {
    let catalog = DamCatalog::new(Arc::new(FileDamSource::new(corpus_path())));
    let corpus = catalog.corpus().await.unwrap();

    let kurobe = corpus.get("kurobe").unwrap();
    assert_eq!(kurobe.name_ja, "黒部ダム");
    assert_eq!(corpus.duplicate_ids(), 0);
}

#[tokio::test]
async fn full_questionnaire_yields_primary_and_two_secondaries() {
    let catalog = Arc::new(DamCatalog::new(Arc::new(FileDamSource::new(corpus_path()))));
    let questions = QuestionCatalog::standard();
    let handler = DiagnoseHandler::new(
        Arc::new(questions.clone()),
        catalog,
        DamMatcher::default(),
    );

    let answers = questions
        .questions()
        .iter()
        .map(|q| Answer::new(q.id.as_str(), q.choices[0].key.as_str()))
        .collect();

    let diagnosis = handler.handle(DiagnoseCommand { answers }).await.unwrap();

    assert_eq!(diagnosis.secondaries.len(), 2);
    assert!(diagnosis.primary.match_rate.value() > 0.0);
    assert!(diagnosis.primary.similarity >= diagnosis.secondaries[0].similarity);
    assert!(diagnosis.secondaries[0].similarity >= diagnosis.secondaries[1].similarity);
    assert!(diagnosis.tags.len() <= 3);
}
