use crate::models::domain::gap::EntityCategory;

/// Placeholder substituted when a template references a value the gap item
/// does not carry.
pub const MISSING_VALUE_PLACEHOLDER: &str = "this";

pub const COUNTRY_TEMPLATES: &[&str] = &[
    "Which country is {entity}?",
    "What is the capital of {entity}?",
    "Which continent is {entity} in?",
];

pub const ARTIST_TEMPLATES: &[&str] = &[
    "Who is {entity}?",
    "Which genre does {entity} perform?",
];

pub const MOVIE_TEMPLATES: &[&str] = &[
    "Which movie is this scene from?",
    "Name the movie: {entity}",
    "Which year was {entity} released?",
];

pub const BRAND_TEMPLATES: &[&str] = &[
    "What color is {entity}'s logo?",
    "Which company owns {entity}?",
    "What does {entity} produce?",
];

pub fn entity_templates(category: EntityCategory) -> &'static [&'static str] {
    match category {
        EntityCategory::Countries => COUNTRY_TEMPLATES,
        EntityCategory::Artists => ARTIST_TEMPLATES,
        EntityCategory::Movies => MOVIE_TEMPLATES,
        EntityCategory::Brands => BRAND_TEMPLATES,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeScope {
    Label,
    LabelAndKeywords,
}

/// A theme phrasing chosen when any needle occurs in the scoped text.
pub struct ThemeRule {
    pub needles: &'static [&'static str],
    pub scope: ThemeScope,
    pub template: &'static str,
}

/// Evaluated in order; the first matching rule wins.
pub const THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        needles: &["emoji"],
        scope: ThemeScope::LabelAndKeywords,
        template: "What does this emoji sequence mean: 🍕💔?",
    },
    ThemeRule {
        needles: &["tiktok"],
        scope: ThemeScope::LabelAndKeywords,
        template: "Complete this TikTok audio: 'Oh no, oh no, oh no no no...'",
    },
    ThemeRule {
        needles: &["slang", "gen z"],
        scope: ThemeScope::Label,
        template: "What does '{slang}' mean?",
    },
];

pub const DEFAULT_THEME_TEMPLATE: &str = "Which topic relates to {keyword}?";

/// Substituted for `{slang}` when a theme has no keywords.
pub const DEFAULT_SLANG_KEYWORD: &str = "no cap";

pub const DEFAULT_FIELD_TEMPLATE: &str = "Which topic relates to {field}?";
