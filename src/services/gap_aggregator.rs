use std::collections::BTreeMap;

use crate::{
    config::AggregationConfig,
    errors::AppResult,
    models::domain::{EntityCategory, FieldCoverage, PrioritizedGaps, ThemeGap},
    repositories::GapSource,
};

/// Merges the upstream analyzer feeds into one ranked gap structure.
pub struct GapAggregator {
    config: AggregationConfig,
}

impl GapAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Never fails: any feed that errors contributes nothing.
    pub fn aggregate(&self, source: &dyn GapSource) -> PrioritizedGaps {
        let entities = or_empty("missing entities", source.missing_entities());
        let themes = or_empty("missing themes", source.missing_themes());
        let coverage = or_empty("field coverage", source.field_coverage());
        let reference_lists = or_empty("reference lists", source.reference_lists());

        let gaps = PrioritizedGaps {
            entities: self.rank_entities(entities),
            themes: self.rank_themes(themes),
            fields: self.rank_fields(coverage),
            reference_lists,
        };

        log::info!(
            "Aggregated gaps: {} entities, {} themes, {} fields",
            gaps.entity_count(),
            gaps.themes.len(),
            gaps.fields.len()
        );
        gaps
    }

    fn entity_cap(&self, category: EntityCategory) -> usize {
        match category {
            EntityCategory::Countries => self.config.country_cap,
            EntityCategory::Artists => self.config.artist_cap,
            EntityCategory::Movies => self.config.movie_cap,
            EntityCategory::Brands => self.config.brand_cap,
        }
    }

    fn rank_entities(
        &self,
        entities: BTreeMap<EntityCategory, Vec<String>>,
    ) -> BTreeMap<EntityCategory, Vec<String>> {
        entities
            .into_iter()
            .map(|(category, names)| {
                let ranked: Vec<String> = names
                    .into_iter()
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .take(self.entity_cap(category))
                    .collect();
                (category, ranked)
            })
            .filter(|(_, names)| !names.is_empty())
            .collect()
    }

    fn rank_themes(&self, mut themes: Vec<ThemeGap>) -> Vec<ThemeGap> {
        themes.retain(|t| t.size >= self.config.min_theme_size);
        // Stable sort keeps report order among equal sizes.
        themes.sort_by(|a, b| b.size.cmp(&a.size));
        themes.truncate(self.config.theme_cap);
        themes
    }

    fn rank_fields(&self, mut coverage: Vec<FieldCoverage>) -> Vec<String> {
        coverage.retain(|f| {
            !f.field.is_empty() && f.coverage_percentage < self.config.field_coverage_threshold
        });
        coverage.sort_by(|a, b| a.coverage_percentage.total_cmp(&b.coverage_percentage));
        coverage
            .into_iter()
            .take(self.config.field_cap)
            .map(|f| f.field)
            .collect()
    }
}

fn or_empty<T: Default>(feed: &str, result: AppResult<T>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("Gap feed '{}' unavailable, treating as empty: {}", feed, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::ReferenceLists;
    use crate::repositories::gap_source_repository::MockGapSource;

    fn aggregator() -> GapAggregator {
        GapAggregator::new(AggregationConfig::default())
    }

    fn names(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{} {}", prefix, i)).collect()
    }

    fn mock_with(
        entities: BTreeMap<EntityCategory, Vec<String>>,
        themes: Vec<ThemeGap>,
        coverage: Vec<FieldCoverage>,
    ) -> MockGapSource {
        let mut source = MockGapSource::new();
        source
            .expect_missing_entities()
            .returning(move || Ok(entities.clone()));
        source
            .expect_missing_themes()
            .returning(move || Ok(themes.clone()));
        source
            .expect_field_coverage()
            .returning(move || Ok(coverage.clone()));
        source
            .expect_reference_lists()
            .returning(|| Ok(ReferenceLists::new()));
        source
    }

    #[test]
    fn entity_lists_are_capped_in_order() {
        let mut entities = BTreeMap::new();
        entities.insert(EntityCategory::Countries, names("Country", 25));
        entities.insert(EntityCategory::Artists, names("Artist", 25));
        let source = mock_with(entities, vec![], vec![]);

        let gaps = aggregator().aggregate(&source);

        assert_eq!(gaps.entities_for(EntityCategory::Countries).len(), 10);
        assert_eq!(gaps.entities_for(EntityCategory::Artists).len(), 20);
        assert_eq!(gaps.entities_for(EntityCategory::Countries)[0], "Country 0");
        assert_eq!(gaps.entities_for(EntityCategory::Artists)[19], "Artist 19");
    }

    #[test]
    fn small_themes_are_noise_and_the_rest_sort_by_size() {
        let themes = vec![
            ThemeGap::new("small", vec![], 9),
            ThemeGap::new("medium", vec![], 15),
            ThemeGap::new("edge", vec![], 10),
            ThemeGap::new("large", vec![], 40),
        ];
        let source = mock_with(BTreeMap::new(), themes, vec![]);

        let gaps = aggregator().aggregate(&source);
        let labels: Vec<&str> = gaps.themes.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(labels, ["large", "medium", "edge"]);
    }

    #[test]
    fn fields_below_threshold_sort_ascending() {
        let coverage = vec![
            FieldCoverage { field: "Nostalgia".into(), coverage_percentage: 3.2 },
            FieldCoverage { field: "Digital Life".into(), coverage_percentage: 12.0 },
            FieldCoverage { field: "Somatic/Body".into(), coverage_percentage: 0.4 },
            FieldCoverage { field: "Common Sense".into(), coverage_percentage: 5.0 },
        ];
        let source = mock_with(BTreeMap::new(), vec![], coverage);

        let gaps = aggregator().aggregate(&source);

        assert_eq!(gaps.fields, ["Somatic/Body", "Nostalgia"]);
    }

    #[test]
    fn failing_feeds_degrade_to_empty() {
        let mut source = MockGapSource::new();
        source
            .expect_missing_entities()
            .returning(|| Err(AppError::ParseError("bad csv".into())));
        source
            .expect_missing_themes()
            .returning(|| Err(AppError::NotFound("report".into())));
        source
            .expect_field_coverage()
            .returning(|| Ok(vec![FieldCoverage { field: "Nostalgia".into(), coverage_percentage: 1.0 }]));
        source
            .expect_reference_lists()
            .returning(|| Err(AppError::IoError("denied".into())));

        let gaps = aggregator().aggregate(&source);

        assert_eq!(gaps.entity_count(), 0);
        assert!(gaps.themes.is_empty());
        assert_eq!(gaps.fields, ["Nostalgia"]);
        assert!(gaps.reference_lists.is_empty());
    }

    #[test]
    fn aggregation_is_repeatable() {
        let mut entities = BTreeMap::new();
        entities.insert(EntityCategory::Movies, names("Movie", 5));
        let themes = vec![ThemeGap::new("b", vec![], 12), ThemeGap::new("a", vec![], 12)];
        let source = mock_with(entities, themes, vec![]);

        let first = aggregator().aggregate(&source);
        let second = aggregator().aggregate(&source);

        assert_eq!(first, second);
        assert_eq!(first.themes[0].label, "b");
    }

    #[test]
    fn blank_entity_names_are_dropped() {
        let mut entities = BTreeMap::new();
        entities.insert(EntityCategory::Brands, vec!["  ".into(), "Nike".into()]);
        entities.insert(EntityCategory::Movies, vec!["".into()]);
        let source = mock_with(entities, vec![], vec![]);

        let gaps = aggregator().aggregate(&source);

        assert_eq!(gaps.entities_for(EntityCategory::Brands), ["Nike"]);
        assert!(!gaps.entities.contains_key(&EntityCategory::Movies));
    }
}
