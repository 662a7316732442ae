use std::collections::BTreeMap;

use rand::Rng;

use crate::{
    config::GenerationConfig,
    constants::answer_tables::DEFAULT_FIELDS,
    models::domain::{
        CandidateQuestion, EntityCategory, GapItem, KnowledgeBase, PrioritizedGaps,
        QuestionCategory, ValidatedQuestion,
    },
    services::{
        answer_synthesizer::AnswerSynthesizer, question_synthesizer::QuestionSynthesizer,
        semantic_validator::SemanticValidator,
    },
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub requested: usize,
    pub attempted: usize,
    pub semantic_rejections: usize,
    pub synthesis_skips: usize,
    pub accepted_by_category: BTreeMap<QuestionCategory, usize>,
    pub target_met: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GenerationOutcome {
    pub questions: Vec<ValidatedQuestion>,
    pub stats: GenerationStats,
}

/// Spends the output target across entity categories by weight, then
/// backfills from themes and finally from a bounded cycle over fields.
pub struct GenerationAllocator<'a> {
    knowledge: &'a KnowledgeBase,
    validator: SemanticValidator,
    field_retry_multiplier: usize,
}

struct Run<'s, 'a, R: ?Sized> {
    answers: AnswerSynthesizer<'a>,
    validator: &'s SemanticValidator,
    rng: &'s mut R,
    target: usize,
    questions: Vec<ValidatedQuestion>,
    stats: GenerationStats,
}

impl<R: Rng + ?Sized> Run<'_, '_, R> {
    fn is_full(&self) -> bool {
        self.questions.len() >= self.target
    }

    /// Returns true when the item produced an accepted question.
    fn attempt(&mut self, item: GapItem) -> bool {
        self.stats.attempted += 1;

        let answers = match self.answers.synthesize_answers(&item, &mut *self.rng) {
            Ok(answers) => answers,
            Err(e) => {
                log::debug!("Skipping gap item: {}", e);
                self.stats.synthesis_skips += 1;
                return false;
            }
        };
        let question = QuestionSynthesizer::synthesize_question(
            &item,
            answers.question_text.as_deref(),
            &mut *self.rng,
        );
        let candidate = CandidateQuestion::new(question, answers, item);

        match self.validator.accept(candidate) {
            Ok(validated) => {
                *self
                    .stats
                    .accepted_by_category
                    .entry(validated.category)
                    .or_default() += 1;
                self.questions.push(validated);
                true
            }
            Err(verdict) => {
                log::debug!("Rejected candidate: {}", verdict.reasons.join("; "));
                self.stats.semantic_rejections += 1;
                false
            }
        }
    }
}

impl<'a> GenerationAllocator<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, config: &GenerationConfig) -> Self {
        Self {
            knowledge,
            validator: SemanticValidator::new(config.length_slack),
            field_retry_multiplier: config.field_retry_multiplier.max(1),
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        target_count: usize,
        gaps: &PrioritizedGaps,
        rng: &mut R,
    ) -> GenerationOutcome {
        let mut run = Run {
            answers: AnswerSynthesizer::new(self.knowledge, &gaps.reference_lists),
            validator: &self.validator,
            rng,
            target: target_count,
            questions: Vec::with_capacity(target_count),
            stats: GenerationStats {
                requested: target_count,
                ..GenerationStats::default()
            },
        };

        for category in EntityCategory::BY_WEIGHT {
            let sub_target = category.sub_target(target_count);
            let mut accepted = 0;
            for name in gaps.entities_for(category) {
                if run.is_full() || accepted >= sub_target {
                    break;
                }
                if run.attempt(GapItem::entity(category, name.clone())) {
                    accepted += 1;
                }
            }
            log::info!(
                "{}: {}/{} accepted from {} gaps",
                category,
                accepted,
                sub_target,
                gaps.entities_for(category).len()
            );
        }

        for theme in &gaps.themes {
            if run.is_full() {
                break;
            }
            run.attempt(GapItem::Theme(theme.clone()));
        }

        if !run.is_full() {
            let shortfall = target_count - run.questions.len();
            let fields: Vec<String> = if gaps.fields.is_empty() {
                DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
            } else {
                gaps.fields.clone()
            };
            let max_attempts = shortfall * self.field_retry_multiplier;

            for field in fields.iter().cycle().take(max_attempts) {
                if run.is_full() {
                    break;
                }
                run.attempt(GapItem::field(field.clone()));
            }
        }

        run.stats.target_met = run.is_full();
        log::info!(
            "Generated {}/{} questions ({} attempts, {} semantic rejections, {} skips)",
            run.questions.len(),
            target_count,
            run.stats.attempted,
            run.stats.semantic_rejections,
            run.stats.synthesis_skips
        );

        GenerationOutcome {
            questions: run.questions,
            stats: run.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{KnowledgeEntry, ThemeGap};
    use crate::test_utils::fixtures::{full_gaps, knowledge_for};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> GenerationConfig {
        GenerationConfig::default()
    }

    fn artist_entries(n: usize) -> Vec<KnowledgeEntry> {
        (0..n)
            .map(|i| KnowledgeEntry {
                name: format!("Artist {}", i),
                category: EntityCategory::Artists,
                questions: vec![format!("Which singer recorded hit single number {}?", i)],
                answer: format!("Artist {}", i),
                distractors: vec!["Someone".into(), "Nobody".into()],
            })
            .collect()
    }

    #[test]
    fn sub_target_caps_a_category() {
        let kb = KnowledgeBase::from_entries(artist_entries(30));
        let mut gaps = PrioritizedGaps::default();
        gaps.entities.insert(
            EntityCategory::Artists,
            (0..30).map(|i| format!("Artist {}", i)).collect(),
        );
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(10, &gaps, &mut ChaCha8Rng::seed_from_u64(1));

        let artists = QuestionCategory::Entity(EntityCategory::Artists);
        assert_eq!(outcome.stats.accepted_by_category[&artists], 4);
        assert_eq!(outcome.questions.len(), 10);
        assert!(outcome.questions[..4].iter().all(|q| q.category == artists));
        assert!(outcome.questions[4..].iter().all(|q| q.category == QuestionCategory::Field));
        assert!(outcome.stats.target_met);
    }

    #[test]
    fn output_follows_weight_order_then_backfill() {
        let gaps = full_gaps();
        let kb = knowledge_for(&gaps);
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(100, &gaps, &mut ChaCha8Rng::seed_from_u64(8));

        let categories: Vec<QuestionCategory> =
            outcome.questions.iter().map(|q| q.category).collect();
        let entity = QuestionCategory::Entity;
        assert_eq!(categories.len(), 100);
        assert!(categories[..40].iter().all(|c| *c == entity(EntityCategory::Artists)));
        assert!(categories[40..60].iter().all(|c| *c == entity(EntityCategory::Countries)));
        assert!(categories[60..80].iter().all(|c| *c == entity(EntityCategory::Movies)));
        assert!(categories[80..90].iter().all(|c| *c == entity(EntityCategory::Brands)));
        assert_eq!(categories[90], QuestionCategory::Theme);
        assert!(categories[91..].iter().all(|c| *c == QuestionCategory::Field));
        assert_eq!(outcome.questions[0].correct_answer, "artists 0");
    }

    #[test]
    fn rejected_items_do_not_consume_the_sub_target() {
        // Only the curated artists survive the tautology check, so the
        // allocator must keep iterating past the rejected ones.
        let kb = KnowledgeBase::from_entries(artist_entries(2));
        let mut gaps = PrioritizedGaps::default();
        gaps.entities.insert(
            EntityCategory::Artists,
            vec!["Uncurated".into(), "Artist 0".into(), "Plain".into(), "Artist 1".into()],
        );
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(10, &gaps, &mut ChaCha8Rng::seed_from_u64(2));

        let artists = QuestionCategory::Entity(EntityCategory::Artists);
        assert_eq!(outcome.stats.accepted_by_category[&artists], 2);
        assert_eq!(outcome.stats.semantic_rejections, 2);
        assert_eq!(outcome.questions[0].correct_answer, "Artist 0");
        assert_eq!(outcome.questions[1].correct_answer, "Artist 1");
    }

    #[test]
    fn themes_fill_before_fields() {
        let kb = KnowledgeBase::default();
        let mut gaps = PrioritizedGaps::default();
        gaps.themes.push(ThemeGap::new(
            "emoji meaning",
            vec!["meaning".into(), "emoji".into()],
            30,
        ));
        gaps.fields.push("Common Sense".into());
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(3, &gaps, &mut ChaCha8Rng::seed_from_u64(3));

        assert_eq!(outcome.questions.len(), 3);
        assert_eq!(outcome.questions[0].category, QuestionCategory::Theme);
        assert_eq!(outcome.questions[1].category, QuestionCategory::Field);
    }

    #[test]
    fn field_backfill_is_bounded() {
        let kb = KnowledgeBase::default();
        let mut gaps = PrioritizedGaps::default();
        // A blank field name fails synthesis on every pass.
        gaps.fields.push(" ".into());
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(10, &gaps, &mut ChaCha8Rng::seed_from_u64(4));

        assert!(outcome.questions.is_empty());
        assert_eq!(outcome.stats.attempted, 30);
        assert_eq!(outcome.stats.synthesis_skips, 30);
        assert!(!outcome.stats.target_met);
    }

    #[test]
    fn default_fields_cover_an_empty_feed() {
        let kb = KnowledgeBase::default();
        let allocator = GenerationAllocator::new(&kb, &config());

        let outcome = allocator.generate(
            5,
            &PrioritizedGaps::default(),
            &mut ChaCha8Rng::seed_from_u64(5),
        );

        assert_eq!(outcome.questions.len(), 5);
        let fields: Vec<&str> = outcome
            .questions
            .iter()
            .map(|q| q.source_gap_item.label())
            .collect();
        assert_eq!(fields, DEFAULT_FIELDS);
    }

    #[test]
    fn same_seed_same_output() {
        let kb = KnowledgeBase::builtin();
        let mut gaps = PrioritizedGaps::default();
        gaps.entities.insert(
            EntityCategory::Artists,
            vec!["Drake".into(), "Taylor Swift".into(), "Bad Bunny".into()],
        );
        let allocator = GenerationAllocator::new(&kb, &config());

        let first = allocator.generate(20, &gaps, &mut ChaCha8Rng::seed_from_u64(9));
        let second = allocator.generate(20, &gaps, &mut ChaCha8Rng::seed_from_u64(9));

        assert_eq!(first.questions, second.questions);
        assert_eq!(first.stats, second.stats);
    }
}
