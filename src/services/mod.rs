pub mod answer_synthesizer;
pub mod gap_aggregator;
pub mod generation_allocator;
pub mod pipeline;
pub mod question_exporter;
pub mod question_synthesizer;
pub mod semantic_validator;
pub mod structural_validator;

pub use gap_aggregator::GapAggregator;
pub use generation_allocator::{GenerationAllocator, GenerationOutcome, GenerationStats};
pub use pipeline::{run_pipeline, PipelineReport};
pub use question_exporter::{finalize, FinalizedBatch, QuestionExporter};
