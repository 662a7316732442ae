#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        EntityCategory, KnowledgeBase, KnowledgeEntry, PrioritizedGaps, ReferenceLists, ThemeGap,
    };

    /// Curated entry whose question never names the answer
    pub fn curated_entry(category: EntityCategory, name: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            name: name.to_string(),
            category,
            questions: vec![format!(
                "Which {} matches catalogue entry {}?",
                category,
                name.len()
            )],
            answer: name.to_string(),
            distractors: vec!["Decoy One".into(), "Decoy Two".into(), "Decoy Three".into()],
        }
    }

    /// Entity names like `artists 0`, `artists 1`, ...
    pub fn entity_names(category: EntityCategory, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{} {}", category, i)).collect()
    }

    /// Knowledge base covering every name in `gaps`, so template
    /// tautologies never interfere with allocation
    pub fn knowledge_for(gaps: &PrioritizedGaps) -> KnowledgeBase {
        KnowledgeBase::from_entries(gaps.entities.iter().flat_map(|(category, names)| {
            names.iter().map(|name| curated_entry(*category, name))
        }))
    }

    /// 40 artists, 20 countries, 20 movies, 10 brands plus one theme and
    /// one field
    pub fn full_gaps() -> PrioritizedGaps {
        let mut gaps = PrioritizedGaps::default();
        for (category, n) in [
            (EntityCategory::Artists, 40),
            (EntityCategory::Countries, 20),
            (EntityCategory::Movies, 20),
            (EntityCategory::Brands, 10),
        ] {
            gaps.entities.insert(category, entity_names(category, n));
        }
        gaps.themes.push(ThemeGap::new(
            "emoji meaning",
            vec!["meaning".into(), "emoji".into()],
            30,
        ));
        gaps.fields.push("Common Sense".into());
        gaps.reference_lists = ReferenceLists::new()
            .with(EntityCategory::Countries, &["France", "Peru", "Chile", "Kenya"]);
        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::EntityCategory;

    #[test]
    fn test_fixtures_full_gaps() {
        let gaps = full_gaps();
        assert_eq!(gaps.entities_for(EntityCategory::Artists).len(), 40);
        assert_eq!(gaps.entity_count(), 90);
        assert_eq!(gaps.themes.len(), 1);
    }

    #[test]
    fn test_fixtures_knowledge_for() {
        let gaps = full_gaps();
        let kb = knowledge_for(&gaps);
        assert_eq!(kb.len(), 90);
        assert!(kb.lookup("brands 9").is_some());
    }

    #[test]
    fn test_fixtures_curated_entry() {
        let entry = curated_entry(EntityCategory::Movies, "Jaws");
        assert_eq!(entry.answer, "Jaws");
        assert!(!entry.questions[0].contains("Jaws"));
    }
}
