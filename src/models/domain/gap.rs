use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference-list backed entity families tracked by the coverage analysis.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Countries,
    Artists,
    Movies,
    Brands,
}

impl EntityCategory {
    /// Allocation order: highest weight first.
    pub const BY_WEIGHT: [EntityCategory; 4] = [
        EntityCategory::Artists,
        EntityCategory::Countries,
        EntityCategory::Movies,
        EntityCategory::Brands,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Countries => "countries",
            EntityCategory::Artists => "artists",
            EntityCategory::Movies => "movies",
            EntityCategory::Brands => "brands",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "countries" => Some(EntityCategory::Countries),
            "artists" => Some(EntityCategory::Artists),
            "movies" => Some(EntityCategory::Movies),
            "brands" => Some(EntityCategory::Brands),
            _ => None,
        }
    }

    /// Share of the output target, in percent. The 10% left over is
    /// absorbed by the theme and field backfill stages.
    pub fn weight_percent(&self) -> usize {
        match self {
            EntityCategory::Artists => 40,
            EntityCategory::Countries => 20,
            EntityCategory::Movies => 20,
            EntityCategory::Brands => 10,
        }
    }

    pub fn sub_target(&self, target_count: usize) -> usize {
        target_count * self.weight_percent() / 100
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum ThemePriority {
    High,
    Medium,
}

/// A cluster of existing questions that no tag covers well.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeGap {
    pub label: String,
    pub keywords: Vec<String>,
    pub size: usize,
}

impl ThemeGap {
    pub fn new(label: impl Into<String>, keywords: Vec<String>, size: usize) -> Self {
        Self {
            label: label.into(),
            keywords,
            size,
        }
    }

    pub fn priority(&self) -> ThemePriority {
        if self.size > 20 {
            ThemePriority::High
        } else {
            ThemePriority::Medium
        }
    }

    /// Label and keywords lowercased into one searchable string.
    pub fn search_text(&self) -> String {
        let mut text = self.label.to_lowercase();
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(&keyword.to_lowercase());
        }
        text
    }
}

/// One row of the taxonomy coverage table.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FieldCoverage {
    pub field: String,
    pub coverage_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum GapItem {
    Entity {
        category: EntityCategory,
        name: String,
    },
    Theme(ThemeGap),
    Field {
        field_name: String,
    },
}

impl GapItem {
    pub fn entity(category: EntityCategory, name: impl Into<String>) -> Self {
        GapItem::Entity {
            category,
            name: name.into(),
        }
    }

    pub fn field(field_name: impl Into<String>) -> Self {
        GapItem::Field {
            field_name: field_name.into(),
        }
    }

    /// Human-readable name of the gap, used in logs and rejection reports.
    pub fn label(&self) -> &str {
        match self {
            GapItem::Entity { name, .. } => name,
            GapItem::Theme(theme) => &theme.label,
            GapItem::Field { field_name } => field_name,
        }
    }
}

/// Canonical entity names per category, the pool for wrong answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReferenceLists {
    lists: BTreeMap<EntityCategory, Vec<String>>,
}

impl ReferenceLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `names` for `category`, dropping blanks and repeated names
    /// while keeping first-seen order.
    pub fn insert(&mut self, category: EntityCategory, names: Vec<String>) {
        let mut seen = std::collections::HashSet::new();
        let cleaned = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty() && seen.insert(n.to_lowercase()))
            .collect();
        self.lists.insert(category, cleaned);
    }

    pub fn with(mut self, category: EntityCategory, names: &[&str]) -> Self {
        self.insert(category, names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn get(&self, category: EntityCategory) -> &[String] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.lists.values().all(Vec::is_empty)
    }
}

/// Ranked gap feed handed to the generation allocator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PrioritizedGaps {
    pub entities: BTreeMap<EntityCategory, Vec<String>>,
    pub themes: Vec<ThemeGap>,
    pub fields: Vec<String>,
    pub reference_lists: ReferenceLists,
}

impl PrioritizedGaps {
    pub fn entities_for(&self, category: EntityCategory) -> &[String] {
        self.entities
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entity_count(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0 && self.themes.is_empty() && self.fields.is_empty()
    }
}
