//! Converting between the two notations: `a : b` and `a/b`.
//!
//! Distractors model the usual slips: flipping the order and mixing up
//! part-to-part with part-to-whole.

use crate::training_engine::{
    helpers::{frac, question, ratio, ratio_tight, round_div, visual},
    models::{Question, QuestionKind},
};

pub fn ratio_to_fraction(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let text = format!(
        "There are {a} {name1} and {b} {name2}.\n\
         Express the number of {name1} to {name2} as a fraction."
    );
    let explanation = format!(
        "The ratio of {name1} to {name2} is {}.\n\
         As a fraction, this is {} ({name1} over {name2}).",
        ratio_tight(a, b),
        frac(a, b),
    );
    question(
        QuestionKind::RatioToFraction,
        visual(glyph1, a, glyph2, b),
        text,
        frac(a, b),
        [frac(b, a), frac(a, a + b), frac(b, a + b)],
        explanation,
    )
}

pub fn fraction_to_ratio(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let text = format!(
        "If the fraction of {name1} to {name2} is {},\n\
         what is the ratio of {name1} to {name2}?",
        frac(a, b),
    );
    let explanation = format!(
        "The fraction {} means {a} {name1} for every {b} {name2}.\n\
         As a ratio, this is {}.",
        frac(a, b),
        ratio_tight(a, b),
    );
    question(
        QuestionKind::FractionToRatio,
        visual(glyph1, a, glyph2, b),
        text,
        ratio(a, b),
        [ratio(b, a), ratio(a, a + b), ratio(1, round_div(b, a))],
        explanation,
    )
}

pub fn fraction_comparison(
    a: u32, b: u32, glyph1: &str, glyph2: &str, _name1: &str, _name2: &str,
) -> Question {
    let text = format!("The ratio {} is the same as which fraction?", ratio_tight(a, b));
    let explanation = format!(
        "The ratio {} directly converts to the fraction {}.\n\
         The colon (:) becomes the fraction bar (/).",
        ratio_tight(a, b),
        frac(a, b),
    );
    question(
        QuestionKind::FractionComparison,
        visual(glyph1, a, glyph2, b),
        text,
        frac(a, b),
        [frac(b, a), frac(a, a + b), frac(b, a + b)],
        explanation,
    )
}
