use serde::Serialize;

use crate::models::domain::CandidateQuestion;

/// Shortest question text accepted for export.
pub const MIN_QUESTION_CHARS: usize = 10;

/// A record dropped before export, with the reasons it failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructuralRejection {
    pub question_text: String,
    pub reasons: Vec<String>,
}

pub struct StructuralValidator {
    character_limit: usize,
}

impl StructuralValidator {
    pub fn new(character_limit: usize) -> Self {
        Self { character_limit }
    }

    /// Empty list means the question may be exported.
    pub fn check(&self, question: &CandidateQuestion) -> Vec<String> {
        let mut reasons = Vec::new();
        let fields = [
            ("question", question.question_text.as_str()),
            ("correct answer", question.correct_answer.as_str()),
            ("wrong answer 1", question.wrong_answer_1.as_str()),
            ("wrong answer 2", question.wrong_answer_2.as_str()),
        ];

        for (name, value) in fields {
            // The limit applies to the text as exported, padding included.
            let len = value.chars().count();
            if value.trim().is_empty() {
                reasons.push(format!("Missing {}", name));
            } else if len > self.character_limit {
                reasons.push(format!(
                    "{} exceeds {} characters ({})",
                    name, self.character_limit, len
                ));
            }
        }

        let question_len = question.question_text.trim().chars().count();
        if question_len > 0 && question_len < MIN_QUESTION_CHARS {
            reasons.push(format!(
                "question shorter than {} characters",
                MIN_QUESTION_CHARS
            ));
        }

        let normalized: Vec<String> = question
            .answers()
            .iter()
            .map(|a| a.trim().to_lowercase())
            .collect();
        if normalized[0] == normalized[1]
            || normalized[0] == normalized[2]
            || normalized[1] == normalized[2]
        {
            reasons.push("Duplicate answers".to_string());
        }

        reasons
    }
}
