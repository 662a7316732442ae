use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::domain::gap::{EntityCategory, GapItem};

/// Category a generated question is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum QuestionCategory {
    Entity(EntityCategory),
    Theme,
    Field,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Entity(category) => category.as_str(),
            QuestionCategory::Theme => "theme",
            QuestionCategory::Field => "field",
        }
    }
}

impl From<&GapItem> for QuestionCategory {
    fn from(item: &GapItem) -> Self {
        match item {
            GapItem::Entity { category, .. } => QuestionCategory::Entity(*category),
            GapItem::Theme(_) => QuestionCategory::Theme,
            GapItem::Field { .. } => QuestionCategory::Field,
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the answer synthesizer. `question_text` is only set when a
/// curated knowledge entry supplied the phrasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesizedAnswers {
    pub question_text: Option<String>,
    pub correct: String,
    pub wrong1: String,
    pub wrong2: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateQuestion {
    pub question_text: String,
    pub correct_answer: String,
    pub wrong_answer_1: String,
    pub wrong_answer_2: String,
    pub category: QuestionCategory,
    pub source_gap_item: GapItem,
}

impl CandidateQuestion {
    pub fn new(question_text: String, answers: SynthesizedAnswers, source: GapItem) -> Self {
        Self {
            question_text,
            correct_answer: answers.correct,
            wrong_answer_1: answers.wrong1,
            wrong_answer_2: answers.wrong2,
            category: QuestionCategory::from(&source),
            source_gap_item: source,
        }
    }

    /// Entity name when the question was generated from an entity gap.
    pub fn source_entity(&self) -> Option<&str> {
        match &self.source_gap_item {
            GapItem::Entity { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn answers(&self) -> [&str; 3] {
        [
            &self.correct_answer,
            &self.wrong_answer_1,
            &self.wrong_answer_2,
        ]
    }
}

/// A candidate that passed semantic validation. Only the semantic
/// validator constructs these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedQuestion(CandidateQuestion);

impl ValidatedQuestion {
    pub(crate) fn new(candidate: CandidateQuestion) -> Self {
        Self(candidate)
    }

    pub fn question(&self) -> &CandidateQuestion {
        &self.0
    }

    pub fn into_inner(self) -> CandidateQuestion {
        self.0
    }
}

impl std::ops::Deref for ValidatedQuestion {
    type Target = CandidateQuestion;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> SynthesizedAnswers {
        SynthesizedAnswers {
            question_text: None,
            correct: "Jaws".into(),
            wrong1: "Titanic".into(),
            wrong2: "Avatar".into(),
        }
    }

    #[test]
    fn candidate_takes_category_from_source() {
        let source = GapItem::entity(EntityCategory::Movies, "Jaws");
        let candidate =
            CandidateQuestion::new("Which movie is this scene from?".into(), answers(), source);

        assert_eq!(candidate.category, QuestionCategory::Entity(EntityCategory::Movies));
        assert_eq!(candidate.source_entity(), Some("Jaws"));
        assert_eq!(candidate.answers(), ["Jaws", "Titanic", "Avatar"]);
    }

    #[test]
    fn non_entity_sources_have_no_entity() {
        let candidate = CandidateQuestion::new(
            "How often should you change your bed sheets?".into(),
            answers(),
            GapItem::field("Domestic Sphere"),
        );
        assert_eq!(candidate.category, QuestionCategory::Field);
        assert_eq!(candidate.source_entity(), None);
    }

    #[test]
    fn question_category_names() {
        assert_eq!(QuestionCategory::Entity(EntityCategory::Brands).as_str(), "brands");
        assert_eq!(QuestionCategory::Theme.to_string(), "theme");
        assert_eq!(QuestionCategory::Field.to_string(), "field");
    }
}
