use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{EntityCategory, FieldCoverage, ReferenceLists, ThemeGap},
};

pub const GAP_REPORT_FILE: &str = "gap_analysis_report.md";
pub const ENTITY_COVERAGE_FILE: &str = "entity_coverage.csv";
pub const TAXONOMY_COVERAGE_FILE: &str = "taxonomy_coverage.csv";

static THEME_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?sm)^## 1\. Missing Themes.*?(?:^## 2\.|\z)")
        .expect("THEME_SECTION is a valid regex pattern")
});
static ENTITY_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?sm)^## 2\. Missing Entities.*?(?:^## 3\.|\z)")
        .expect("ENTITY_SECTION is a valid regex pattern")
});
static THEME_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^### \d+\.\s+(.+)$").expect("THEME_HEADING is a valid regex pattern")
});
static CATEGORY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^### ([A-Za-z]+)\s*$").expect("CATEGORY_HEADING is a valid regex pattern")
});
static KEYWORDS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \*\*Keywords\*\*:\s*(.*)$").expect("KEYWORDS_LINE is a valid regex pattern")
});
static SIZE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \*\*Cluster Size\*\*:\s*(\d+)").expect("SIZE_LINE is a valid regex pattern")
});
static MISSING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \*\*Missing\*\*:\s*(.*)$").expect("MISSING_LINE is a valid regex pattern")
});

/// Read access to the artifacts produced by the upstream gap analyzers.
#[cfg_attr(test, mockall::automock)]
pub trait GapSource {
    /// Missing entity names per category, in reference-list order.
    fn missing_entities(&self) -> AppResult<BTreeMap<EntityCategory, Vec<String>>>;
    /// Orphan clusters as reported, in report order.
    fn missing_themes(&self) -> AppResult<Vec<ThemeGap>>;
    fn field_coverage(&self) -> AppResult<Vec<FieldCoverage>>;
    fn reference_lists(&self) -> AppResult<ReferenceLists>;
}

#[derive(Debug, Deserialize)]
struct EntityCoverageRow {
    entity_type: String,
    entity: String,
    category: String,
}

#[derive(Debug, Deserialize)]
struct TaxonomyCoverageRow {
    field: String,
    coverage_percentage: f64,
}

/// Gap source backed by the files the analysis run leaves on disk.
pub struct ArtifactGapSource {
    analysis_dir: PathBuf,
    reference_dir: PathBuf,
}

impl ArtifactGapSource {
    pub fn new(analysis_dir: impl Into<PathBuf>, reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            analysis_dir: analysis_dir.into(),
            reference_dir: reference_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.analysis_dir, &config.reference_dir)
    }

    fn analysis_file(&self, name: &str) -> PathBuf {
        self.analysis_dir.join(name)
    }

    fn read_report(&self) -> AppResult<Option<String>> {
        let path = self.analysis_file(GAP_REPORT_FILE);
        if !path.exists() {
            log::warn!("Gap analysis report not found at {}", path.display());
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn read_entity_coverage(path: &Path) -> AppResult<BTreeMap<EntityCategory, Vec<String>>> {
        let mut missing: BTreeMap<EntityCategory, Vec<String>> = BTreeMap::new();
        let mut reader = csv::Reader::from_path(path)?;

        for result in reader.deserialize() {
            let row: EntityCoverageRow = result?;
            if row.category.trim() != "missing" {
                continue;
            }
            let Some(category) = EntityCategory::from_name(&row.entity_type) else {
                continue;
            };
            let entity = row.entity.trim();
            if !entity.is_empty() {
                missing.entry(category).or_default().push(entity.to_string());
            }
        }

        Ok(missing)
    }
}

impl GapSource for ArtifactGapSource {
    fn missing_entities(&self) -> AppResult<BTreeMap<EntityCategory, Vec<String>>> {
        let csv_path = self.analysis_file(ENTITY_COVERAGE_FILE);
        let mut missing = if csv_path.exists() {
            Self::read_entity_coverage(&csv_path)?
        } else {
            log::warn!("Entity coverage table not found at {}", csv_path.display());
            BTreeMap::new()
        };

        // The report lists the same data in prose; use it for anything the
        // table left empty.
        if let Some(report) = self.read_report()? {
            for (category, names) in parse_report_entities(&report) {
                let slot = missing.entry(category).or_default();
                if slot.is_empty() {
                    *slot = names;
                }
            }
        }

        missing.retain(|_, names| !names.is_empty());
        Ok(missing)
    }

    fn missing_themes(&self) -> AppResult<Vec<ThemeGap>> {
        Ok(self
            .read_report()?
            .map(|report| parse_report_themes(&report))
            .unwrap_or_default())
    }

    fn field_coverage(&self) -> AppResult<Vec<FieldCoverage>> {
        let path = self.analysis_file(TAXONOMY_COVERAGE_FILE);
        if !path.exists() {
            log::warn!("Taxonomy coverage table not found at {}", path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: TaxonomyCoverageRow = result?;
            rows.push(FieldCoverage {
                field: row.field.trim().to_string(),
                coverage_percentage: row.coverage_percentage,
            });
        }
        Ok(rows)
    }

    fn reference_lists(&self) -> AppResult<ReferenceLists> {
        let mut lists = ReferenceLists::new();
        for category in EntityCategory::BY_WEIGHT {
            let path = self
                .reference_dir
                .join(format!("top_{}.json", category.as_str()));
            if !path.exists() {
                log::warn!("Reference list not found at {}", path.display());
                continue;
            }
            let file = File::open(&path)?;
            let names: Vec<String> = serde_json::from_reader(BufReader::new(file)).map_err(
                |e| AppError::ParseError(format!("{}: {}", path.display(), e)),
            )?;
            lists.insert(category, names);
        }
        Ok(lists)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Themes from the `## 1. Missing Themes` section of the markdown report.
pub fn parse_report_themes(report: &str) -> Vec<ThemeGap> {
    let Some(section) = THEME_SECTION.find(report) else {
        return Vec::new();
    };

    let mut themes = Vec::new();
    let mut current: Option<ThemeGap> = None;

    for line in section.as_str().lines().map(str::trim) {
        if let Some(caps) = THEME_HEADING.captures(line) {
            themes.extend(current.take());
            current = Some(ThemeGap::new(caps[1].trim(), Vec::new(), 0));
        } else if let Some(theme) = current.as_mut() {
            if let Some(caps) = KEYWORDS_LINE.captures(line) {
                theme.keywords = split_list(&caps[1]);
            } else if let Some(caps) = SIZE_LINE.captures(line) {
                theme.size = caps[1].parse().unwrap_or(0);
            }
        }
    }
    themes.extend(current);

    for theme in &mut themes {
        if theme.keywords.is_empty() {
            theme.keywords = theme
                .label
                .split_whitespace()
                .take(3)
                .map(str::to_string)
                .collect();
        }
    }
    themes
}

/// Per-category `- **Missing**:` lists from the `## 2. Missing Entities` section.
pub fn parse_report_entities(report: &str) -> BTreeMap<EntityCategory, Vec<String>> {
    let mut missing = BTreeMap::new();
    let Some(section) = ENTITY_SECTION.find(report) else {
        return missing;
    };

    let mut current: Option<EntityCategory> = None;
    for line in section.as_str().lines().map(str::trim) {
        if let Some(caps) = CATEGORY_HEADING.captures(line) {
            current = EntityCategory::from_name(&caps[1]);
        } else if let (Some(category), Some(caps)) = (current, MISSING_LINE.captures(line)) {
            missing.insert(category, split_list(&caps[1]));
        }
    }
    missing
}
