use std::env;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::errors::AppResult;

#[derive(Clone, Debug)]
pub struct Config {
    pub analysis_dir: PathBuf,
    pub reference_dir: PathBuf,
    pub output_dir: PathBuf,
    pub aggregation: AggregationConfig,
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

/// Which question tables the exporter writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn writes_csv(&self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn writes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

/// Caps and thresholds applied when merging upstream gap artifacts.
#[derive(Clone, Debug, PartialEq, Validate)]
pub struct AggregationConfig {
    pub country_cap: usize,
    pub artist_cap: usize,
    pub movie_cap: usize,
    pub brand_cap: usize,
    pub theme_cap: usize,
    pub min_theme_size: usize,
    #[validate(range(min = 0.0, max = 100.0))]
    pub field_coverage_threshold: f64,
    pub field_cap: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            country_cap: 10,
            artist_cap: 20,
            movie_cap: 15,
            brand_cap: 15,
            theme_cap: 20,
            min_theme_size: 10,
            field_coverage_threshold: 5.0,
            field_cap: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Validate)]
pub struct GenerationConfig {
    #[validate(range(min = 1))]
    pub target_count: usize,
    pub length_slack: usize,
    #[validate(range(min = 1))]
    pub field_retry_multiplier: usize,
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_count: 100,
            length_slack: 20,
            field_retry_multiplier: 3,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Validate)]
#[validate(schema(function = "validate_tag_bounds"))]
pub struct ExportConfig {
    #[validate(range(min = 10))]
    pub character_limit: usize,
    #[validate(range(min = 1))]
    pub min_tags: usize,
    pub max_tags: usize,
    /// Answer ids start at `id_start * 100`; the cap keeps that in range.
    #[validate(range(max = 1_000_000_000_000u64))]
    pub id_start: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            character_limit: 100,
            min_tags: 2,
            max_tags: 5,
            id_start: 30131,
        }
    }
}

fn validate_tag_bounds(config: &ExportConfig) -> Result<(), ValidationError> {
    if config.min_tags > config.max_tags {
        let mut err = ValidationError::new("tag_bounds");
        err.message = Some(
            format!(
                "min_tags ({}) must not exceed max_tags ({})",
                config.min_tags, config.max_tags
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        let generation_defaults = GenerationConfig::default();
        let export_defaults = ExportConfig::default();

        Self {
            analysis_dir: env::var("QUIZGAP_ANALYSIS_DIR")
                .unwrap_or_else(|_| "outputs".to_string())
                .into(),
            reference_dir: env::var("QUIZGAP_REFERENCE_DIR")
                .unwrap_or_else(|_| "data/reference_lists".to_string())
                .into(),
            output_dir: env::var("QUIZGAP_OUTPUT_DIR")
                .unwrap_or_else(|_| "outputs".to_string())
                .into(),
            aggregation: AggregationConfig::default(),
            generation: GenerationConfig {
                target_count: env_parsed("QUIZGAP_TARGET_COUNT")
                    .unwrap_or(generation_defaults.target_count),
                seed: env_parsed("QUIZGAP_SEED"),
                ..generation_defaults
            },
            export: ExportConfig {
                character_limit: env_parsed("QUIZGAP_CHARACTER_LIMIT")
                    .unwrap_or(export_defaults.character_limit),
                min_tags: env_parsed("QUIZGAP_MIN_TAGS").unwrap_or(export_defaults.min_tags),
                max_tags: env_parsed("QUIZGAP_MAX_TAGS").unwrap_or(export_defaults.max_tags),
                id_start: env_parsed("QUIZGAP_ID_START").unwrap_or(export_defaults.id_start),
            },
        }
    }

    /// Checks every sub-config; called once after CLI overrides are applied.
    pub fn validate(&self) -> AppResult<()> {
        self.aggregation.validate()?;
        self.generation.validate()?;
        self.export.validate()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            analysis_dir: "test-outputs".into(),
            reference_dir: "test-data/reference_lists".into(),
            output_dir: "test-outputs".into(),
            aggregation: AggregationConfig::default(),
            generation: GenerationConfig {
                seed: Some(42),
                ..GenerationConfig::default()
            },
            export: ExportConfig::default(),
        }
    }
}
