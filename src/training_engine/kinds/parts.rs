use crate::training_engine::{
    helpers::{frac, question, ratio_tight, visual},
    models::{Question, QuestionKind},
};

pub fn part_to_whole(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let total = a + b;
    let text = format!(
        "There are {a} {name1} and {b} {name2}.\n\
         What fraction of the total are {name1}?"
    );
    let explanation = format!(
        "Total items = {a} + {b} = {total}.\n\
         Fraction of {name1} = {a} out of {total} = {}.",
        frac(a, total),
    );
    question(
        QuestionKind::PartToWhole,
        visual(glyph1, a, glyph2, b),
        text,
        frac(a, total),
        [frac(a, b), frac(b, total), frac(total, a)],
        explanation,
    )
}

pub fn ratio_meaning(
    a: u32, b: u32, glyph1: &str, glyph2: &str, name1: &str, name2: &str,
) -> Question {
    let text = format!(
        "The ratio of {name1} to {name2} is {}.\n\
         This means for every {a} {name1}, there are how many {name2}?",
        ratio_tight(a, b),
    );
    let explanation = format!(
        "A ratio of {} means for every {a} {name1}, there are {b} {name2}.",
        ratio_tight(a, b),
    );
    question(
        QuestionKind::RatioMeaning,
        visual(glyph1, a, glyph2, b),
        text,
        b.to_string(),
        [a.to_string(), (a + b).to_string(), (a * b).to_string()],
        explanation,
    )
}
