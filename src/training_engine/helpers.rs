//! Shared builder functions used by every question kind.
//!
//! Each kind formats the same pieces: fractions, ratios, a visual pairing
//! and the final [`Question`] record. These helpers keep the kind files
//! focused on the arithmetic of their options.

use rand::RngCore;
use crate::training_engine::models::{Question, QuestionKind, Visual};

/// Format a fraction (e.g. "2/3").
pub fn frac(num: u32, den: u32) -> String {
    format!("{num}/{den}")
}

/// Format a ratio as an option string (e.g. "2 : 3").
pub fn ratio(left: u32, right: u32) -> String {
    format!("{left} : {right}")
}

/// Format a ratio inline in prose (e.g. "2:3").
pub fn ratio_tight(left: u32, right: u32) -> String {
    format!("{left}:{right}")
}

/// `round(num / den)` with halves rounded up. `den` must be non-zero.
pub fn round_div(num: u32, den: u32) -> u32 {
    (2 * num + den) / (2 * den)
}

/// Short prefix for question IDs.
pub fn id_prefix(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::RatioToFraction    => "RF",
        QuestionKind::FractionToRatio    => "FR",
        QuestionKind::PartToWhole        => "PW",
        QuestionKind::RatioMeaning       => "RM",
        QuestionKind::EquivalentRatio    => "ER",
        QuestionKind::SimplifyRatio      => "SR",
        QuestionKind::FractionComparison => "FC",
    }
}

pub fn make_question_id(kind: QuestionKind, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", id_prefix(kind), rng.next_u32())
}

pub fn visual(glyph1: &str, count1: u32, glyph2: &str, count2: u32) -> Visual {
    Visual {
        glyph1: glyph1.to_string(),
        count1,
        glyph2: glyph2.to_string(),
        count2,
    }
}

/// Assemble a [`Question`]; `correct` becomes `options[0]`.
///
/// `question_id` is left empty for [`kinds::build`](crate::training_engine::kinds::build) to fill.
pub(crate) fn question(
    kind: QuestionKind, visual: Visual, text: String,
    correct: String, distractors: [String; 3], explanation: String,
) -> Question {
    let [d1, d2, d3] = distractors;
    Question {
        question_id: String::new(),
        kind,
        visual,
        question_text: text,
        options: [correct.clone(), d1, d2, d3],
        correct_answer: correct,
        explanation_text: explanation,
    }
}
