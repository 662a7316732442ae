use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::{Config, OutputFormat},
    errors::{AppError, AppResult},
    models::domain::{ExportRecord, KnowledgeBase},
    repositories::GapSource,
    services::{
        gap_aggregator::GapAggregator,
        generation_allocator::GenerationAllocator,
        question_exporter::{finalize, GenerationSummary, QuestionExporter},
    },
};

#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub seed: u64,
    pub summary: GenerationSummary,
    pub records: Vec<ExportRecord>,
    pub written: Vec<PathBuf>,
}

/// Aggregate, generate, validate and export one batch of questions.
///
/// Fails with [`AppError::NothingGenerated`] when no candidate survives
/// either validation stage; partial batches below the target are written.
pub fn run_pipeline(
    config: &Config,
    source: &dyn GapSource,
    knowledge: &KnowledgeBase,
    format: OutputFormat,
) -> AppResult<PipelineReport> {
    let seed = config
        .generation
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Starting generation run with seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let gaps = GapAggregator::new(config.aggregation.clone()).aggregate(source);
    if gaps.is_empty() {
        log::warn!("No gaps discovered; falling back to default fields");
    }

    let target = config.generation.target_count;
    let outcome = GenerationAllocator::new(knowledge, &config.generation)
        .generate(target, &gaps, &mut rng);
    if outcome.questions.is_empty() {
        return Err(AppError::NothingGenerated(format!(
            "0 of {} questions passed semantic validation",
            target
        )));
    }
    if !outcome.stats.target_met {
        log::warn!(
            "Gap sources exhausted after {} of {} questions",
            outcome.questions.len(),
            target
        );
    }

    let batch = finalize(outcome.questions, &config.export, &mut rng);
    if batch.records.is_empty() {
        return Err(AppError::NothingGenerated(format!(
            "all {} generated questions failed structural validation",
            batch.rejected.len()
        )));
    }

    let summary = GenerationSummary::new(&outcome.stats, &batch, format);
    let exporter = QuestionExporter::new(&config.output_dir);
    let written = exporter.export(&batch, &summary, format)?;

    Ok(PipelineReport {
        seed,
        summary,
        records: batch.records,
        written,
    })
}
