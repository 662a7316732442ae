//! Category codes and tag tables carried over from the existing quiz
//! dataset. Some codes are shared across unrelated categories in that
//! dataset; they are kept as-is.

use crate::models::domain::candidate_question::QuestionCategory;
use crate::models::domain::gap::EntityCategory;

pub const DEFAULT_CATEGORY_CODE: u32 = 1;
pub const DEFAULT_PRIMARY_TAG: u32 = 10;

pub fn category_code(category: QuestionCategory) -> u32 {
    match category {
        QuestionCategory::Entity(EntityCategory::Countries) => 4,
        QuestionCategory::Entity(EntityCategory::Artists) => 2,
        QuestionCategory::Entity(EntityCategory::Movies) => 2,
        QuestionCategory::Entity(EntityCategory::Brands) => 4,
        QuestionCategory::Theme => 2,
        QuestionCategory::Field => DEFAULT_CATEGORY_CODE,
    }
}

pub fn primary_tag(category: QuestionCategory) -> u32 {
    match category {
        QuestionCategory::Entity(EntityCategory::Countries) => 4,
        QuestionCategory::Entity(EntityCategory::Artists) => 50,
        QuestionCategory::Entity(EntityCategory::Movies) => 51,
        QuestionCategory::Entity(EntityCategory::Brands) => 7,
        QuestionCategory::Theme => 54,
        QuestionCategory::Field => DEFAULT_PRIMARY_TAG,
    }
}

/// (id, tag, category) for every tag the exporter can emit.
pub const TAG_TABLE: &[(u32, &str, &str)] = &[
    (4, ":COUNTRY", "Geography"),
    (7, ":COMPANY", "Technology"),
    (10, "ED:HISTORY", "Education"),
    (12, "ED:GEOGRAPHY", "Education"),
    (15, "ED:SCIENCE", "Education"),
    (21, "TE:INTERNET", "Technology"),
    (23, "TE:APPS", "Technology"),
    (31, "LF:POP CULTURE", "Lifestyle"),
    (33, "LF:EVERYDAY", "Lifestyle"),
    (50, "EN:MUSIC", "Entertainment"),
    (51, "EN:MOVIE", "Entertainment"),
    (52, "EN:CELEBRITIES", "Entertainment"),
    (54, "EN:FACTS", "Entertainment"),
    (56, "EN:TRENDING", "Entertainment"),
];

/// Pool the additional tags are drawn from.
pub const SECONDARY_TAGS: &[u32] = &[12, 15, 21, 23, 31, 33, 52, 56];
