use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    constants::answer_tables::{
        entity_fillers, field_profile, KNOWLEDGE_PADDING, PLACEHOLDER_FIELD_ANSWERS,
        THEME_FILLERS,
    },
    errors::SynthesisError,
    models::domain::{
        EntityCategory, GapItem, KnowledgeBase, KnowledgeEntry, ReferenceLists,
        SynthesizedAnswers, ThemeGap,
    },
};

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Produces the correct/wrong answer triple for a gap item. Curated
/// knowledge wins over sampled distractors.
pub struct AnswerSynthesizer<'a> {
    knowledge: &'a KnowledgeBase,
    reference_lists: &'a ReferenceLists,
}

impl<'a> AnswerSynthesizer<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, reference_lists: &'a ReferenceLists) -> Self {
        Self {
            knowledge,
            reference_lists,
        }
    }

    pub fn synthesize_answers<R: Rng + ?Sized>(
        &self,
        item: &GapItem,
        rng: &mut R,
    ) -> Result<SynthesizedAnswers, SynthesisError> {
        match item {
            GapItem::Entity { category, name } => {
                if name.trim().is_empty() {
                    return Err(SynthesisError::BlankSource(category.to_string()));
                }
                match self.knowledge.lookup(name) {
                    Some(entry) if !entry.questions.is_empty() => Ok(curated(entry, rng)),
                    _ => Ok(self.entity_answers(*category, name, rng)),
                }
            }
            GapItem::Theme(theme) => Ok(theme_answers(theme, rng)),
            GapItem::Field { field_name } => {
                if field_name.trim().is_empty() {
                    return Err(SynthesisError::BlankSource("field".to_string()));
                }
                Ok(field_answers(field_name))
            }
        }
    }

    fn entity_answers<R: Rng + ?Sized>(
        &self,
        category: EntityCategory,
        name: &str,
        rng: &mut R,
    ) -> SynthesizedAnswers {
        let entity = normalize(name);
        let alternatives: Vec<&str> = self
            .reference_lists
            .get(category)
            .iter()
            .map(String::as_str)
            .filter(|candidate| normalize(candidate) != entity)
            .collect();

        let mut wrong: Vec<String> = alternatives
            .choose_multiple(rng, 2)
            .map(|s| s.to_string())
            .collect();

        if wrong.len() < 2 {
            let mut fillers = entity_fillers(category).to_vec();
            fillers.shuffle(rng);
            let pool = fillers
                .into_iter()
                .chain(KNOWLEDGE_PADDING.iter().copied());
            pad_distinct(&mut wrong, &entity, pool);
        }

        into_answers(None, name.to_string(), wrong)
    }
}

fn curated<R: Rng + ?Sized>(entry: &KnowledgeEntry, rng: &mut R) -> SynthesizedAnswers {
    let answer = normalize(&entry.answer);
    let pool: Vec<&str> = entry
        .distractors
        .iter()
        .map(String::as_str)
        .filter(|d| normalize(d) != answer)
        .collect();

    let mut wrong: Vec<String> = pool
        .choose_multiple(rng, 2)
        .map(|s| s.to_string())
        .collect();
    pad_distinct(&mut wrong, &answer, KNOWLEDGE_PADDING.iter().copied());

    let question = entry.questions.choose(rng).cloned();
    into_answers(question, entry.answer.clone(), wrong)
}

fn theme_answers<R: Rng + ?Sized>(theme: &ThemeGap, rng: &mut R) -> SynthesizedAnswers {
    let correct = theme
        .keywords
        .iter()
        .map(|k| k.trim())
        .find(|k| !k.is_empty())
        .or_else(|| theme.label.split_whitespace().next())
        .unwrap_or_default()
        .to_string();

    let mut fillers = THEME_FILLERS.to_vec();
    fillers.shuffle(rng);
    let mut wrong = Vec::with_capacity(2);
    pad_distinct(&mut wrong, &normalize(&correct), fillers.into_iter());

    into_answers(None, correct, wrong)
}

fn field_answers(field_name: &str) -> SynthesizedAnswers {
    match field_profile(field_name.trim()) {
        Some(profile) => SynthesizedAnswers {
            question_text: None,
            correct: profile.correct.to_string(),
            wrong1: profile.wrong[0].to_string(),
            wrong2: profile.wrong[1].to_string(),
        },
        None => {
            let [correct, wrong1, wrong2] = PLACEHOLDER_FIELD_ANSWERS;
            SynthesizedAnswers {
                question_text: None,
                correct: correct.to_string(),
                wrong1: wrong1.to_string(),
                wrong2: wrong2.to_string(),
            }
        }
    }
}

/// Tops `wrong` up to two entries from `pool`, skipping the correct answer
/// and anything already chosen.
fn pad_distinct<'p>(
    wrong: &mut Vec<String>,
    correct: &str,
    pool: impl Iterator<Item = &'p str>,
) {
    for candidate in pool {
        if wrong.len() >= 2 {
            break;
        }
        let normalized = normalize(candidate);
        if normalized == correct || wrong.iter().any(|w| normalize(w) == normalized) {
            continue;
        }
        wrong.push(candidate.to_string());
    }
}

fn into_answers(
    question_text: Option<String>,
    correct: String,
    wrong: Vec<String>,
) -> SynthesizedAnswers {
    let mut wrong = wrong.into_iter();
    SynthesizedAnswers {
        question_text,
        correct,
        wrong1: wrong.next().unwrap_or_default(),
        wrong2: wrong.next().unwrap_or_default(),
    }
}
