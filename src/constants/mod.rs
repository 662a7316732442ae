pub mod answer_tables;
pub mod knowledge_base;
pub mod question_templates;
pub mod tags;
