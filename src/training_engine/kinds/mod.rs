//! Question kinds grouped by the skill they drill.
//!
//! Every public builder has the same shape:
//!
//! ```ignore
//! pub fn <kind>(a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str) -> Question
//! ```
//!
//! `a`/`b` are the item counts and `name1`/`name2` the plural labels.
//! Builders are pure and leave `question_id` empty; [`build`] is the public
//! entry point and stamps the ID. All randomness happens in `generator.rs`.

use crate::training_engine::models::{Question, QuestionKind};

/// ratio-to-fraction, fraction-to-ratio, fraction-comparison
pub(crate) mod conversion;
/// part-to-whole, ratio-meaning
pub(crate) mod parts;
/// equivalent-ratio, simplify-ratio
pub(crate) mod scaling;

/// Dispatch a kind to its builder and stamp `question_id` on the result.
pub fn build(
    kind: QuestionKind, question_id: String, a: u32, b: u32,
    glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let builder: fn(u32, u32, &str, &str, &str, &str) -> Question = match kind {
        QuestionKind::RatioToFraction    => conversion::ratio_to_fraction,
        QuestionKind::FractionToRatio    => conversion::fraction_to_ratio,
        QuestionKind::FractionComparison => conversion::fraction_comparison,
        QuestionKind::PartToWhole        => parts::part_to_whole,
        QuestionKind::RatioMeaning       => parts::ratio_meaning,
        QuestionKind::EquivalentRatio    => scaling::equivalent_ratio,
        QuestionKind::SimplifyRatio      => scaling::simplify_ratio,
    };
    let mut question = builder(a, b, glyph1, glyph2, name1, name2);
    question.question_id = question_id;
    question
}
