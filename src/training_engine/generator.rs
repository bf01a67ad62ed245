use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    catalog::{pick_item_pair, pick_number_pair},
    helpers::make_question_id,
    kinds,
    models::{Question, QuestionKind, QuestionRequest},
};

/// Build an RNG from an optional seed; entropy when `None`.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Generate one question with a caller-owned RNG.
///
/// Draw order: kind (when not pinned), category, item pair, number pair,
/// question ID.
pub fn generate_with<R: Rng>(rng: &mut R, kind: Option<QuestionKind>) -> Question {
    let kind = match kind {
        Some(kind) => kind,
        None       => QuestionKind::ALL[rng.gen_range(0..QuestionKind::ALL.len())],
    };
    let (category, first, second) = pick_item_pair(rng);
    let (a, b) = pick_number_pair(rng);

    let question_id = make_question_id(kind, rng);

    let question = kinds::build(
        kind, question_id, a, b, first.glyph, second.glyph, &first.plural(), &second.plural(),
    );

    tracing::debug!(
        id = %question.question_id, %kind, %category,
        item1 = first.label, item2 = second.label, a, b,
        "generated question"
    );
    question
}

/// Single entry point for one-off questions.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng = make_rng(request.rng_seed);
    generate_with(&mut rng, request.kind)
}

/// `n` independent questions; repeats across the batch are allowed.
pub fn generate_session<R: Rng>(rng: &mut R, n: usize) -> Vec<Question> {
    (0..n).map(|_| generate_with(rng, None)).collect()
}
