use rand::{seq::SliceRandom, Rng};
use serde_json::{json, Value};

use crate::training_engine::{
    models::{AnswerOutcome, Question, SessionSummary, Visual},
    simplifier::{SimplificationWalkthrough, SimplifyStep},
};

/// Above this count on either side the visual switches to "glyph × count".
pub const EXPANDED_VISUAL_LIMIT: u32 = 6;
/// Cap on glyphs drawn in the walkthrough's final proof row.
pub const PROOF_GLYPH_LIMIT: u32 = 10;

const CAT: &str = "🐱";
const DOG: &str = "🐶";

/// Build the visual block: repeated glyphs for small counts, compact otherwise.
fn visual_block(v: &Visual) -> Value {
    if v.count1 <= EXPANDED_VISUAL_LIMIT && v.count2 <= EXPANDED_VISUAL_LIMIT {
        json!({
            "layout": "expanded",
            "left":  v.glyph1.repeat(v.count1 as usize),
            "right": v.glyph2.repeat(v.count2 as usize),
        })
    } else {
        json!({
            "layout": "compact",
            "left":  format!("{} × {}", v.glyph1, v.count1),
            "right": format!("{} × {}", v.glyph2, v.count2),
        })
    }
}

/// Map a question to the payload a client renders.
///
/// Options are shuffled and the correct answer is withheld; the client sends
/// the chosen option text back to [`QuizSession::submit_answer`](crate::QuizSession::submit_answer).
pub fn question_view<R: Rng>(question: &Question, number: usize, total: usize, rng: &mut R) -> Value {
    let mut options = question.options.to_vec();
    options.shuffle(rng);
    let progress = if total == 0 { 0.0 } else { 100.0 * number.saturating_sub(1) as f64 / total as f64 };

    json!({
        "question_id": question.question_id,
        "kind":        question.kind,
        "number":      number,
        "total":       total,
        "progress":    progress,
        "visual":      visual_block(&question.visual),
        "text":        question.question_text,
        "options":     options,
    })
}

/// Map an answer outcome to feedback: which buttons to highlight and what to say.
pub fn answer_view(outcome: &AnswerOutcome, answered: usize) -> Value {
    let streak = if outcome.show_streak { format!("🔥{}", outcome.streak) } else { String::new() };
    json!({
        "is_correct":     outcome.is_correct,
        "icon":           if outcome.is_correct { "✅" } else { "❌" },
        "headline":       if outcome.is_correct { "Correct!" } else { "Not quite!" },
        "chosen":         outcome.chosen,
        "correct_answer": outcome.correct_answer,
        "explanation":    outcome.explanation_text,
        "score":          outcome.score,
        "answered":       answered,
        "streak":         streak,
    })
}

pub fn results_view(summary: &SessionSummary) -> Value {
    json!({
        "score":      summary.score,
        "total":      summary.total,
        "percentage": summary.percentage,
        "icon":       summary.tier.icon(),
        "title":      summary.tier.title(),
        "message":    summary.tier.message(),
    })
}

fn proof_row(glyph: &str, n: u32) -> String {
    glyph.repeat(n.min(PROOF_GLYPH_LIMIT) as usize)
}

fn step_panel(step: &SimplifyStep) -> Value {
    let body = match *step {
        SimplifyStep::Start { cats, dogs } => json!({
            "fraction": format!("{cats}/{dogs}"),
            "ratio":    format!("{cats} : {dogs}"),
        }),
        SimplifyStep::FindGcd { cats, dogs, divisor, reduced_cats, reduced_dogs } => json!({
            "factors": [
                format!("{cats} = {divisor} × {reduced_cats}"),
                format!("{dogs} = {divisor} × {reduced_dogs}"),
            ],
            "gcd": divisor,
        }),
        SimplifyStep::Divide { cats, dogs, divisor, reduced_cats, reduced_dogs } => json!({
            "fraction": {
                "from": format!("{cats}/{dogs}"),
                "numerator":   format!("{cats} ÷ {divisor} = {reduced_cats}"),
                "denominator": format!("{dogs} ÷ {divisor} = {reduced_dogs}"),
            },
            "ratio": {
                "from": format!("{cats} : {dogs}"),
                "to":   format!("{cats}÷{divisor} : {dogs}÷{divisor} = {reduced_cats} : {reduced_dogs}"),
            },
        }),
        SimplifyStep::Result { reduced_cats, reduced_dogs } => json!({
            "fraction": format!("{reduced_cats}/{reduced_dogs}"),
            "ratio":    format!("{reduced_cats} : {reduced_dogs}"),
            "proof":    [proof_row(CAT, reduced_cats), proof_row(DOG, reduced_dogs)],
        }),
    };
    json!({
        "index":       step.index(),
        "badge":       step.badge(),
        "description": step.description(),
        "connector":   step.connector(),
        "body":        body,
    })
}

fn count_label(n: u32, noun: &str) -> String {
    if n == 1 { format!("{n} {noun}") } else { format!("{n} {noun}s") }
}

/// Map the walkthrough to the count header plus the revealed panels.
pub fn walkthrough_view(walkthrough: &SimplificationWalkthrough) -> Value {
    let s = &walkthrough.simplification;
    let panels: Vec<Value> = walkthrough.visible_steps().iter().map(step_panel).collect();
    json!({
        "cats":         s.cats,
        "dogs":         s.dogs,
        "cat_label":    count_label(s.cats, "cat"),
        "dog_label":    count_label(s.dogs, "dog"),
        "fraction":     format!("{}/{}", s.cats, s.dogs),
        "ratio":        format!("{} : {}", s.cats, s.dogs),
        "current_step": walkthrough.current_step,
        "complete":     walkthrough.is_complete(),
        "panels":       panels,
    })
}
