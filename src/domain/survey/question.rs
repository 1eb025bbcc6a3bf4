//! Question and choice types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ChoiceKey, QuestionId, ValidationError};
use crate::domain::traits::TraitDelta;

/// Thematic group a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    /// Storage and pace.
    A,
    /// Release and output.
    B,
    /// Response to input.
    C,
    /// Role and purpose.
    D,
    /// Scale and time.
    E,
}

impl QuestionCategory {
    /// Returns a short English description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            QuestionCategory::A => "Storage / Pace",
            QuestionCategory::B => "Release / Output",
            QuestionCategory::C => "Input Response",
            QuestionCategory::D => "Role / Purpose",
            QuestionCategory::E => "Scale / Time",
        }
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub key: ChoiceKey,
    pub text: String,
    #[serde(default)]
    pub effects: TraitDelta,
}

impl Choice {
    pub fn new(
        key: impl Into<String>,
        text: impl Into<String>,
        effects: TraitDelta,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key: ChoiceKey::new(key)?,
            text: text.into(),
            effects,
        })
    }
}

/// A survey question with an ordered, non-empty list of choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Creates a question, validating that choices are present and keys unique.
    pub fn new(
        id: impl Into<String>,
        category: QuestionCategory,
        text: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id: QuestionId::new(id)?,
            category,
            text: text.into(),
            choices,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the invariants that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.choices.is_empty() {
            return Err(ValidationError::empty_field(format!("{}.choices", self.id)));
        }
        let mut seen = HashSet::new();
        for choice in &self.choices {
            if !seen.insert(choice.key.as_str()) {
                return Err(ValidationError::duplicate(
                    format!("{}.choices.key", self.id),
                    choice.key.as_str(),
                ));
            }
        }
        Ok(())
    }

    /// Finds a choice by key.
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key == *key)
    }
}
