pub mod candidate_question;
pub mod export_record;
pub mod gap;
pub mod knowledge;
pub use candidate_question::{CandidateQuestion, QuestionCategory, SynthesizedAnswers, ValidatedQuestion};
pub use export_record::{ExportRecord, QuestionType, TagDefinition};
pub use gap::{
    EntityCategory, FieldCoverage, GapItem, PrioritizedGaps, ReferenceLists, ThemeGap,
    ThemePriority,
};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
