use crate::models::domain::gap::EntityCategory;

/// Pads a curated distractor pool that has fewer than two entries.
pub const KNOWLEDGE_PADDING: &[&str] = &["Other", "Unknown"];

pub const COUNTRY_FILLERS: &[&str] = &["France", "Germany", "Italy", "Spain", "Japan"];
pub const ARTIST_FILLERS: &[&str] = &[
    "Taylor Swift",
    "Ed Sheeran",
    "Beyoncé",
    "Adele",
    "Bruno Mars",
];
pub const MOVIE_FILLERS: &[&str] = &["Titanic", "Avatar", "Inception", "The Matrix", "Jaws"];
pub const BRAND_FILLERS: &[&str] = &["Nike", "Apple", "Coca-Cola", "Samsung", "Adidas"];
pub const THEME_FILLERS: &[&str] = &["Other", "Not Listed", "Various"];

pub fn entity_fillers(category: EntityCategory) -> &'static [&'static str] {
    match category {
        EntityCategory::Countries => COUNTRY_FILLERS,
        EntityCategory::Artists => ARTIST_FILLERS,
        EntityCategory::Movies => MOVIE_FILLERS,
        EntityCategory::Brands => BRAND_FILLERS,
    }
}

/// Question phrasings and a fixed answer triple for one taxonomy field.
pub struct FieldProfile {
    pub field: &'static str,
    pub questions: &'static [&'static str],
    pub correct: &'static str,
    pub wrong: [&'static str; 2],
}

pub const FIELD_PROFILES: &[FieldProfile] = &[
    FieldProfile {
        field: "Domestic Sphere",
        questions: &[
            "How often should you change your bed sheets?",
            "How often is it recommended to wash bath towels?",
        ],
        correct: "Weekly",
        wrong: ["Monthly", "Every few months"],
    },
    FieldProfile {
        field: "Digital Life",
        questions: &[
            "What does the slang 'no cap' mean?",
            "What does someone mean when they say 'no cap'?",
        ],
        correct: "No exaggeration",
        wrong: ["Without a hat", "Out of time"],
    },
    FieldProfile {
        field: "Nostalgia",
        questions: &[
            "In which decade was the Tamagotchi first released?",
            "In which decade did the Spice Girls first top the charts?",
        ],
        correct: "1990s",
        wrong: ["1980s", "2000s"],
    },
    FieldProfile {
        field: "Somatic/Body",
        questions: &["How many bones are in the adult human body?"],
        correct: "206",
        wrong: ["186", "226"],
    },
    FieldProfile {
        field: "Visual Memory",
        questions: &[
            "Which colors make up the McDonald's logo?",
            "What colors are used in the Shell logo?",
        ],
        correct: "Red and Yellow",
        wrong: ["Blue and Green", "Black and White"],
    },
    FieldProfile {
        field: "Common Sense",
        questions: &[
            "How many hours of sleep should adults get each night?",
            "How many hours of sleep do guidelines recommend for adults?",
        ],
        correct: "7-9 hours",
        wrong: ["2-4 hours", "12-14 hours"],
    },
];

pub fn field_profile(field: &str) -> Option<&'static FieldProfile> {
    FIELD_PROFILES.iter().find(|p| p.field == field)
}

/// Answers for fields without a profile.
pub const PLACEHOLDER_FIELD_ANSWERS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Cycled when the taxonomy analysis reported no underrepresented fields.
pub const DEFAULT_FIELDS: &[&str] = &[
    "Domestic Sphere",
    "Digital Life",
    "Nostalgia",
    "Visual Memory",
    "Common Sense",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_field_has_a_profile() {
        for field in DEFAULT_FIELDS {
            assert!(field_profile(field).is_some(), "{} has no profile", field);
        }
    }

    #[test]
    fn field_answer_triples_are_distinct() {
        for profile in FIELD_PROFILES {
            let mut answers = vec![
                profile.correct.to_lowercase(),
                profile.wrong[0].to_lowercase(),
                profile.wrong[1].to_lowercase(),
            ];
            answers.sort();
            answers.dedup();
            assert_eq!(answers.len(), 3, "{} repeats an answer", profile.field);
        }
    }

    #[test]
    fn fillers_hold_at_least_three_names() {
        for category in EntityCategory::BY_WEIGHT {
            assert!(entity_fillers(category).len() >= 3);
        }
    }
}
