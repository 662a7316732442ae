use serde::Serialize;

use crate::models::domain::{CandidateQuestion, ValidatedQuestion};

const YEAR_PHRASES: &[&str] = &["which year", "what year", "when was"];
const COUNT_PHRASE: &str = "how many";
const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];
const IDENTITY_PHRASES: &[&str] = &["who is", "what is"];
/// Answers this short are allowed to appear inside the question.
const SUBSTRING_MIN_CHARS: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SemanticVerdict {
    pub accepted: bool,
    pub reasons: Vec<String>,
}

pub struct SemanticValidator {
    length_slack: usize,
}

impl SemanticValidator {
    pub fn new(length_slack: usize) -> Self {
        Self { length_slack }
    }

    pub fn validate_semantics(&self, candidate: &CandidateQuestion) -> SemanticVerdict {
        let question = candidate.question_text.trim();
        let answer = candidate.correct_answer.trim();

        if question.is_empty() || answer.is_empty() {
            return SemanticVerdict {
                accepted: false,
                reasons: vec!["Missing text".to_string()],
            };
        }

        let q_lower = question.to_lowercase();
        let a_lower = answer.to_lowercase();
        let mut reasons = Vec::new();

        // Tautology
        if q_lower == a_lower {
            reasons.push("Tautology: answer repeats the question".to_string());
        } else if let Some(entity) = candidate.source_entity() {
            let entity = entity.trim().to_lowercase();
            if a_lower == entity
                && IDENTITY_PHRASES
                    .iter()
                    .any(|p| q_lower.contains(&format!("{} {}", p, entity)))
            {
                reasons.push(format!("Tautology: asks who/what '{}' is", answer));
            }
        }
        if reasons.is_empty()
            && a_lower.chars().count() > SUBSTRING_MIN_CHARS
            && q_lower.contains(&a_lower)
        {
            reasons.push(format!("Tautology: answer '{}' appears in the question", answer));
        }

        // Type consistency
        if YEAR_PHRASES.iter().any(|p| q_lower.contains(p))
            && !answer.chars().any(|c| c.is_ascii_digit())
        {
            reasons.push(format!("Type mismatch: year question answered with '{}'", answer));
        }
        if q_lower.contains(COUNT_PHRASE) && !is_numeric_answer(&a_lower) {
            reasons.push(format!("Type mismatch: count question answered with '{}'", answer));
        }

        // Length plausibility
        let question_len = question.chars().count();
        let answer_len = answer.chars().count();
        if answer_len > question_len + self.length_slack {
            reasons.push(format!(
                "Implausible length: answer has {} chars, question {}",
                answer_len, question_len
            ));
        }

        SemanticVerdict {
            accepted: reasons.is_empty(),
            reasons,
        }
    }

    /// Promotes a candidate that passes every check. The verdict is handed
    /// back on rejection so callers can report the reasons.
    pub fn accept(&self, candidate: CandidateQuestion) -> Result<ValidatedQuestion, SemanticVerdict> {
        let verdict = self.validate_semantics(&candidate);
        if verdict.accepted {
            Ok(ValidatedQuestion::new(candidate))
        } else {
            Err(verdict)
        }
    }
}

/// Digits, or a number word anywhere in the answer ("eighteen" holds "eight").
fn is_numeric_answer(answer: &str) -> bool {
    answer.chars().any(|c| c.is_ascii_digit())
        || NUMBER_WORDS.iter().any(|word| answer.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{EntityCategory, GapItem, SynthesizedAnswers, ThemeGap};

    fn candidate(question: &str, correct: &str, source: GapItem) -> CandidateQuestion {
        CandidateQuestion::new(
            question.to_string(),
            SynthesizedAnswers {
                question_text: None,
                correct: correct.to_string(),
                wrong1: "Other".to_string(),
                wrong2: "Unknown".to_string(),
            },
            source,
        )
    }

    fn validator() -> SemanticValidator {
        SemanticValidator::new(20)
    }

    #[test]
    fn curated_drake_question_is_accepted() {
        let c = candidate(
            "Which Toronto rapper released the 2016 album 'Views'?",
            "Drake",
            GapItem::entity(EntityCategory::Artists, "Drake"),
        );

        let verdict = validator().validate_semantics(&c);

        assert!(verdict.accepted, "{:?}", verdict.reasons);
    }

    #[test]
    fn templated_country_question_is_over_rejected() {
        // Known over-rejection: the entity name appears in its own question.
        let c = candidate(
            "Which country is France?",
            "France",
            GapItem::entity(EntityCategory::Countries, "France"),
        );

        let verdict = validator().validate_semantics(&c);

        assert!(!verdict.accepted);
        assert!(verdict.reasons[0].starts_with("Tautology"));
    }

    #[test]
    fn fill_in_the_blank_answers_are_rejected_too() {
        let c = candidate(
            "Complete the country name: France is Fra___?",
            "France",
            GapItem::entity(EntityCategory::Countries, "France"),
        );

        assert!(!validator().validate_semantics(&c).accepted);
    }

    #[test]
    fn who_is_entity_is_a_tautology() {
        let c = candidate(
            "Who is Sia?",
            "Sia",
            GapItem::entity(EntityCategory::Artists, "Sia"),
        );

        let verdict = validator().validate_semantics(&c);

        assert!(!verdict.accepted);
        assert!(verdict.reasons[0].contains("who/what"));
    }

    #[test]
    fn identity_form_needs_the_entity_right_after_the_phrase() {
        let c = candidate(
            "What is the Pixar film where a house floats upward on balloons?",
            "Up",
            GapItem::entity(EntityCategory::Movies, "Up"),
        );

        let verdict = validator().validate_semantics(&c);

        assert!(verdict.accepted, "{:?}", verdict.reasons);
    }

    #[test]
    fn short_answers_may_appear_in_the_question() {
        let c = candidate(
            "Which Pixar film follows a house lifted by balloons? Up",
            "Up",
            GapItem::entity(EntityCategory::Movies, "Up"),
        );

        assert!(validator().validate_semantics(&c).accepted);
    }

    #[test]
    fn empty_answer_is_missing_text() {
        let c = candidate(
            "Which topic relates to this?",
            " ",
            GapItem::Theme(ThemeGap::new("", vec![], 12)),
        );

        let verdict = validator().validate_semantics(&c);

        assert_eq!(verdict.reasons, ["Missing text"]);
    }

    #[test]
    fn year_questions_need_a_digit() {
        let source = GapItem::field("Nostalgia");
        let bad = candidate("In which year did the Berlin Wall fall? What year?", "Autumn", source.clone());
        let good = candidate("What year did the Berlin Wall fall?", "1989", source);

        assert!(!validator().validate_semantics(&bad).accepted);
        assert!(validator().validate_semantics(&good).accepted);
    }

    #[test]
    fn count_questions_accept_digits_or_number_words() {
        let source = GapItem::field("Somatic/Body");
        let q = "How many hearts does an octopus have?";

        assert!(validator().validate_semantics(&candidate(q, "3", source.clone())).accepted);
        assert!(validator().validate_semantics(&candidate(q, "Three", source.clone())).accepted);
        assert!(validator().validate_semantics(&candidate(q, "Eighteen", source.clone())).accepted);
        assert!(validator().validate_semantics(&candidate(q, "Sixty", source.clone())).accepted);
        assert!(!validator().validate_semantics(&candidate(q, "Several", source)).accepted);
    }

    #[test]
    fn overlong_answers_are_implausible() {
        let c = candidate(
            "Which topic?",
            "A very long answer that goes on well past the question",
            GapItem::field("Common Sense"),
        );

        let verdict = validator().validate_semantics(&c);

        assert!(!verdict.accepted);
        assert!(verdict.reasons.iter().any(|r| r.starts_with("Implausible length")));
    }

    #[test]
    fn accept_wraps_or_returns_verdict() {
        let ok = candidate(
            "How often should you change your bed sheets?",
            "Weekly",
            GapItem::field("Domestic Sphere"),
        );
        let validated = validator().accept(ok.clone()).expect("accepted");
        assert_eq!(validated.question(), &ok);

        let bad = candidate("Who is Adele?", "Adele", GapItem::entity(EntityCategory::Artists, "Adele"));
        let verdict = validator().accept(bad).unwrap_err();
        assert!(!verdict.reasons.is_empty());
    }
}
