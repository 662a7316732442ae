use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::{
    constants::{
        answer_tables::field_profile,
        question_templates::{
            entity_templates, ThemeScope, DEFAULT_FIELD_TEMPLATE, DEFAULT_SLANG_KEYWORD,
            DEFAULT_THEME_TEMPLATE, MISSING_VALUE_PLACEHOLDER, THEME_RULES,
        },
    },
    models::domain::{GapItem, ThemeGap},
};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("PLACEHOLDER is a valid regex pattern"));

/// Fills `{name}` placeholders from `lookup`; anything it cannot resolve
/// becomes a neutral placeholder word.
pub fn render_template<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1])
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(MISSING_VALUE_PLACEHOLDER)
                .to_string()
        })
        .into_owned()
}

/// Builds question text for a gap item, either passing through a curated
/// phrasing or filling a category template.
pub struct QuestionSynthesizer;

impl QuestionSynthesizer {
    pub fn synthesize_question<R: Rng + ?Sized>(
        item: &GapItem,
        precomputed_question: Option<&str>,
        rng: &mut R,
    ) -> String {
        if let Some(question) = precomputed_question {
            return question.to_string();
        }

        match item {
            GapItem::Entity { category, name } => {
                let template = entity_templates(*category)
                    .choose(rng)
                    .copied()
                    .unwrap_or(DEFAULT_THEME_TEMPLATE);
                render_template(template, |key| match key {
                    "entity" => Some(name.as_str()),
                    _ => None,
                })
            }
            GapItem::Theme(theme) => Self::theme_question(theme),
            GapItem::Field { field_name } => {
                let template = field_profile(field_name.trim())
                    .and_then(|profile| profile.questions.choose(rng).copied())
                    .unwrap_or(DEFAULT_FIELD_TEMPLATE);
                render_template(template, |key| match key {
                    "field" => Some(field_name.as_str()),
                    _ => None,
                })
            }
        }
    }

    fn theme_question(theme: &ThemeGap) -> String {
        let label = theme.label.to_lowercase();
        let full = theme.search_text();

        let template = THEME_RULES
            .iter()
            .find(|rule| {
                let haystack = match rule.scope {
                    ThemeScope::Label => &label,
                    ThemeScope::LabelAndKeywords => &full,
                };
                rule.needles.iter().any(|needle| haystack.contains(needle))
            })
            .map(|rule| rule.template)
            .unwrap_or(DEFAULT_THEME_TEMPLATE);

        let first_keyword = theme.keywords.first().map(String::as_str);
        render_template(template, |key| match key {
            "keyword" => first_keyword,
            "slang" => first_keyword.or(Some(DEFAULT_SLANG_KEYWORD)),
            "label" => Some(theme.label.as_str()),
            _ => None,
        })
    }
}
