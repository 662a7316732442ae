use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    config::{ExportConfig, OutputFormat},
    constants::tags::{category_code, primary_tag, SECONDARY_TAGS, TAG_TABLE},
    errors::AppResult,
    models::domain::{
        CandidateQuestion, ExportRecord, QuestionCategory, QuestionType, TagDefinition,
        ValidatedQuestion,
    },
    services::{
        generation_allocator::GenerationStats,
        structural_validator::{StructuralRejection, StructuralValidator},
    },
};

pub const QUESTIONS_CSV_FILE: &str = "generated_questions.csv";
pub const QUESTIONS_JSON_FILE: &str = "generated_questions.json";
pub const TAG_DEFINITIONS_FILE: &str = "tag_definitions.csv";
pub const SUMMARY_FILE: &str = "generation_summary.json";

/// Records ready to persist plus everything dropped on the way.
#[derive(Clone, Debug, Default)]
pub struct FinalizedBatch {
    pub records: Vec<ExportRecord>,
    pub rejected: Vec<StructuralRejection>,
    pub tag_definitions: Vec<TagDefinition>,
}

/// Structural validation, identifier assignment and tagging.
pub fn finalize<R: Rng + ?Sized>(
    candidates: Vec<ValidatedQuestion>,
    config: &ExportConfig,
    rng: &mut R,
) -> FinalizedBatch {
    let validator = StructuralValidator::new(config.character_limit);
    let mut accepted: Vec<CandidateQuestion> = Vec::with_capacity(candidates.len());
    let mut rejected = Vec::new();

    for candidate in candidates {
        let question = candidate.into_inner();
        let reasons = validator.check(&question);
        if reasons.is_empty() {
            accepted.push(question);
        } else {
            log::warn!(
                "Dropping '{}': {}",
                question.question_text,
                reasons.join("; ")
            );
            rejected.push(StructuralRejection {
                question_text: question.question_text,
                reasons,
            });
        }
    }

    let n = accepted.len() as u64;
    let answer_start = config.id_start * 100;
    let records = accepted
        .into_iter()
        .enumerate()
        .map(|(i, question)| {
            let i = i as u64;
            let tag_ids = assign_tags(question.category, config, &mut *rng);
            ExportRecord {
                question_type: QuestionType::Text,
                question_id: config.id_start + i,
                category_code: category_code(question.category),
                question_text: question.question_text,
                correct_answer: question.correct_answer,
                wrong_answer_1: question.wrong_answer_1,
                wrong_answer_2: question.wrong_answer_2,
                correct_answer_id: answer_start + i,
                wrong_answer_1_id: answer_start + n + i,
                wrong_answer_2_id: answer_start + 2 * n + i,
                tag_ids,
            }
        })
        .collect();

    FinalizedBatch {
        records,
        rejected,
        tag_definitions: tag_definitions(),
    }
}

/// Primary tag first, then distinct secondary tags until the drawn total
/// in `[min_tags, max_tags]` is reached or the pool runs out.
pub fn assign_tags<R: Rng + ?Sized>(
    category: QuestionCategory,
    config: &ExportConfig,
    rng: &mut R,
) -> Vec<u32> {
    let min = config.min_tags.max(1);
    let max = config.max_tags.max(min);
    let total = rng.gen_range(min..=max);

    let primary = primary_tag(category);
    let mut tags = vec![primary];
    tags.extend(
        SECONDARY_TAGS
            .choose_multiple(rng, total - 1)
            .copied()
            .filter(|t| *t != primary),
    );
    tags
}

pub fn tag_definitions() -> Vec<TagDefinition> {
    TAG_TABLE
        .iter()
        .map(|(id, tag, category)| TagDefinition {
            id: *id,
            tag: tag.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Run-level metadata persisted beside the question tables.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationSummary {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub requested: usize,
    pub generated: usize,
    pub semantic_rejections: usize,
    pub synthesis_skips: usize,
    pub accepted_by_category: BTreeMap<String, usize>,
    pub structural_rejections: Vec<StructuralRejection>,
    pub exported: usize,
    pub format: OutputFormat,
}

impl GenerationSummary {
    pub fn new(stats: &GenerationStats, batch: &FinalizedBatch, format: OutputFormat) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            requested: stats.requested,
            generated: stats.accepted_by_category.values().sum(),
            semantic_rejections: stats.semantic_rejections,
            synthesis_skips: stats.synthesis_skips,
            accepted_by_category: stats
                .accepted_by_category
                .iter()
                .map(|(category, count)| (category.to_string(), *count))
                .collect(),
            structural_rejections: batch.rejected.clone(),
            exported: batch.records.len(),
            format,
        }
    }
}

/// Writes export artifacts into one output directory.
pub struct QuestionExporter {
    output_dir: PathBuf,
}

impl QuestionExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes the selected question tables, the tag table and the summary.
    /// Returns every path written.
    pub fn export(
        &self,
        batch: &FinalizedBatch,
        summary: &GenerationSummary,
        format: OutputFormat,
    ) -> AppResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;
        let mut written = Vec::new();

        if format.writes_csv() {
            written.push(self.write_csv(QUESTIONS_CSV_FILE, &batch.records)?);
        }
        if format.writes_json() {
            written.push(self.write_json(QUESTIONS_JSON_FILE, &batch.records)?);
        }
        written.push(self.write_csv(TAG_DEFINITIONS_FILE, &batch.tag_definitions)?);
        written.push(self.write_json(SUMMARY_FILE, summary)?);

        log::info!(
            "Exported {} questions to {}",
            batch.records.len(),
            self.output_dir.display()
        );
        Ok(written)
    }

    fn write_csv<T: Serialize>(&self, name: &str, rows: &[T]) -> AppResult<PathBuf> {
        let path = self.output_dir.join(name);
        let mut writer = csv::Writer::from_path(&path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> AppResult<PathBuf> {
        let path = self.output_dir.join(name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(path)
    }
}
