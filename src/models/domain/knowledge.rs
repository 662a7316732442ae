use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::knowledge_base::BUILTIN_KNOWLEDGE;
use crate::models::domain::gap::EntityCategory;

/// A hand-authored fact about one entity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct KnowledgeEntry {
    pub name: String,
    pub category: EntityCategory,
    pub questions: Vec<String>,
    pub answer: String,
    pub distractors: Vec<String>,
}

/// Read-only lookup of curated facts keyed by exact entity name.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_KNOWLEDGE.iter().map(|seed| KnowledgeEntry {
            name: seed.name.to_string(),
            category: seed.category,
            questions: seed.questions.iter().map(|q| q.to_string()).collect(),
            answer: seed.answer.to_string(),
            distractors: seed.distractors.iter().map(|d| d.to_string()).collect(),
        }))
    }

    /// Later entries with the same name replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = KnowledgeEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter(|e| !e.questions.is_empty())
                .map(|e| (e.name.clone(), e))
                .collect(),
        }
    }

    /// Case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
