//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;

use persona_insight::adapters::catalog::YamlCatalogLoader;
use persona_insight::adapters::memory::{InMemoryAnswerStore, InMemoryReportRepository};
use persona_insight::domain::assessment::{AnswerRecord, AssessmentEngine, Framework};
use persona_insight::domain::foundation::UserId;

pub fn engine() -> Arc<AssessmentEngine> {
    let catalog = YamlCatalogLoader::embedded().expect("embedded catalog");
    Arc::new(AssessmentEngine::with_defaults(Arc::new(catalog)))
}

pub fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

fn yes_no(answer: &str, category: &str) -> AnswerRecord {
    AnswerRecord::new(answer, category, ["Yes", "No"], json!([1, 0]))
}

/// Scenario A: E over I 3-1, S over N 1-0, T/F and J/P unanswered.
pub fn mbti_estj() -> Vec<AnswerRecord> {
    vec![
        yes_no("Yes", "E"),
        yes_no("Yes", "E"),
        yes_no("Yes", "E"),
        yes_no("Yes", "I"),
        yes_no("Yes", "S"),
    ]
}

/// Dominance first, Influence second.
pub fn disc_di() -> Vec<AnswerRecord> {
    let options = ["Most like me", "Least like me"];
    vec![
        AnswerRecord::new("Most like me", "D", options, json!([{"D": 1}, {}])),
        AnswerRecord::new("Most like me", "D", options, json!([{"D": 1}, {}])),
        AnswerRecord::new("Most like me", "I", options, json!([{"I": 1}, {}])),
    ]
}

/// High Extraversion and Agreeableness, low Neuroticism.
pub fn big_five_social() -> Vec<AnswerRecord> {
    let options = ["Strongly agree", "Agree", "Neutral", "Disagree", "Strongly disagree"];
    let likert = json!([5, 4, 3, 2, 1]);
    vec![
        AnswerRecord::new("Agree", "外向性", options, likert.clone()),
        AnswerRecord::new("Strongly agree", "A", options, likert.clone()),
        AnswerRecord::new("Disagree", "Neuroticism", options, likert),
    ]
}

/// Type 8 leading with a 7 wing.
pub fn enneagram_eight() -> Vec<AnswerRecord> {
    let options = ["是", "否"];
    vec![
        AnswerRecord::new("是", "類型8", options, json!({"類型8": 1})),
        AnswerRecord::new("是", "類型8", options, json!({"類型8": 1})),
        AnswerRecord::new("是", "類型7", options, json!({"類型7": 1})),
    ]
}

pub async fn seeded_store(user_id: &UserId, frameworks: &[Framework]) -> InMemoryAnswerStore {
    let store = InMemoryAnswerStore::new();
    for framework in frameworks {
        let answers = match framework {
            Framework::Mbti => mbti_estj(),
            Framework::Disc => disc_di(),
            Framework::BigFive => big_five_social(),
            Framework::Enneagram => enneagram_eight(),
        };
        store.submit(user_id, *framework, answers).await;
    }
    store
}

pub fn report_repository() -> Arc<InMemoryReportRepository> {
    Arc::new(InMemoryReportRepository::new())
}
