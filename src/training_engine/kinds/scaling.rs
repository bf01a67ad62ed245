//! Scaling a ratio up and back down.
//!
//! Both kinds use a fixed multiplier of 2. `simplify_ratio` shows the
//! scaled-up counts in its visual and asks for the original pair.

use crate::training_engine::{
    helpers::{question, ratio, ratio_tight, round_div, visual},
    models::{Question, QuestionKind},
};

const MULTIPLIER: u32 = 2;

pub fn equivalent_ratio(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let (big_a, big_b) = (a * MULTIPLIER, b * MULTIPLIER);
    let text = format!(
        "If the ratio of {name1} to {name2} is {},\n\
         what is an equivalent ratio?",
        ratio_tight(a, b),
    );
    let explanation = format!(
        "To find an equivalent ratio, multiply both parts by the same number.\n\
         {a}×{MULTIPLIER} : {b}×{MULTIPLIER} = {}",
        ratio_tight(big_a, big_b),
    );
    question(
        QuestionKind::EquivalentRatio,
        visual(glyph1, a, glyph2, b),
        text,
        ratio(big_a, big_b),
        // "wrong multiplier" slips: adding instead of scaling, scaling one side
        [ratio(a + 1, b + 1), ratio(a, b + 1), ratio(a * 2, b)],
        explanation,
    )
}

pub fn simplify_ratio(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let (big_a, big_b) = (a * MULTIPLIER, b * MULTIPLIER);
    let text = format!(
        "There are {big_a} {name1} and {big_b} {name2}.\n\
         What is the ratio in its simplest form?"
    );
    let explanation = format!(
        "{} can be simplified by dividing both by {MULTIPLIER}.\n\
         Simplest form = {}",
        ratio_tight(big_a, big_b),
        ratio_tight(a, b),
    );
    question(
        QuestionKind::SimplifyRatio,
        visual(glyph1, big_a, glyph2, big_b),
        text,
        ratio(a, b),
        [ratio(big_a, big_b), ratio(b, a), ratio(1, round_div(big_b, big_a))],
        explanation,
    )
}
