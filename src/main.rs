use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use quiz_gap_synth::{
    config::{Config, OutputFormat},
    errors::{AppResult, ErrorResponse},
    models::domain::KnowledgeBase,
    repositories::ArtifactGapSource,
    services::{run_pipeline, PipelineReport},
};

/// Generate quiz questions that fill the gaps found by the analysis run
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of questions to generate
    #[arg(long)]
    num: Option<usize>,

    /// Question table format to write
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Minimum tags per question
    #[arg(long)]
    min_tags: Option<usize>,

    /// Maximum tags per question
    #[arg(long)]
    max_tags: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    analysis_dir: Option<PathBuf>,

    #[arg(long)]
    reference_dir: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// First question ID to assign
    #[arg(long)]
    id_start: Option<u64>,

    /// Longest allowed question or answer
    #[arg(long)]
    character_limit: Option<usize>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(num) = self.num {
            config.generation.target_count = num;
        }
        if let Some(min_tags) = self.min_tags {
            config.export.min_tags = min_tags;
        }
        if let Some(max_tags) = self.max_tags {
            config.export.max_tags = max_tags;
        }
        if self.seed.is_some() {
            config.generation.seed = self.seed;
        }
        if let Some(dir) = self.analysis_dir {
            config.analysis_dir = dir;
        }
        if let Some(dir) = self.reference_dir {
            config.reference_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(id_start) = self.id_start {
            config.export.id_start = id_start;
        }
        if let Some(limit) = self.character_limit {
            config.export.character_limit = limit;
        }
    }
}

fn run(args: Args) -> AppResult<PipelineReport> {
    let format = args.format;
    let mut config = Config::from_env();
    args.apply(&mut config);
    config.validate()?;

    let source = ArtifactGapSource::from_config(&config);
    let knowledge = KnowledgeBase::builtin();
    run_pipeline(&config, &source, &knowledge, format)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(report) => {
            println!(
                "Generated {} of {} requested questions (seed {})",
                report.summary.exported, report.summary.requested, report.seed
            );
            for path in &report.written {
                println!("  wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let response = ErrorResponse::from(&err);
            log::error!("{} ({})", response.error, response.code);
            ExitCode::FAILURE
        }
    }
}
