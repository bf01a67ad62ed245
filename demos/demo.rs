//! End-to-end demo: one quiz session and one simplification walkthrough.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=ratio_drill_gen=debug` to see generation and session events.
//!
//! 1. **Sample questions**: one seeded question per kind with its options.
//! 2. **Quiz session**: a seeded 10-question session answered by a learner who
//!    gets every third question wrong, printed through the JSON view adapter.
//! 3. **Walkthrough**: the 25 cats : 20 dogs farm scenario revealed step by
//!    step, then a custom count typed as free text.

use rand::{rngs::StdRng, SeedableRng};
use ratio_drill_gen::{
    generate_question, parse_count, view_adapter, Advance, QuestionKind, QuestionRequest,
    QuizConfig, QuizSession, SimplificationWalkthrough,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ratio_drill_gen=info".parse().unwrap()),
        )
        .init();

    // ── One question per kind ───────────────────────────────────────────────
    println!();
    println!("══ One question per kind ══");
    println!();
    for (i, kind) in QuestionKind::ALL.into_iter().enumerate() {
        let q = generate_question(QuestionRequest::new(kind).seeded(1000 + i as u64));
        println!("━━ [{}] {}  {} × {} : {} × {}",
            q.question_id, kind, q.visual.glyph1, q.visual.count1, q.visual.glyph2, q.visual.count2);
        for line in q.question_text.lines() {
            println!("   {line}");
        }
        for opt in &q.options {
            let mark = if *opt == q.correct_answer { "✓" } else { " " };
            println!("   [{mark}] {opt}");
        }
        println!();
    }

    // ── Quiz session ────────────────────────────────────────────────────────
    println!("══ Quiz session (seed 7) ══");
    println!();
    let config = QuizConfig::default().seeded(7);
    let total = config.total_questions;
    let mut session = QuizSession::new(config);
    let mut view_rng = StdRng::seed_from_u64(7);
    session.start(total);

    let mut n = 0usize;
    loop {
        let q = session.current_question().unwrap().clone();
        let view = view_adapter::question_view(&q, session.question_number(), session.total(), &mut view_rng);
        println!("{}", serde_json::to_string_pretty(&view).unwrap());

        n += 1;
        let choice = if n % 3 == 0 { q.options[1].clone() } else { q.correct_answer.clone() };
        let outcome = session.submit_answer(&choice).unwrap();
        let feedback = view_adapter::answer_view(&outcome, session.answered_count());
        println!("{}", serde_json::to_string_pretty(&feedback).unwrap());
        println!();

        if let Advance::Finished(summary) = session.advance() {
            let results = view_adapter::results_view(&summary);
            println!("{}", serde_json::to_string_pretty(&results).unwrap());
            break;
        }
    }

    // ── Walkthrough ─────────────────────────────────────────────────────────
    println!();
    println!("══ Simplify walkthrough ══");
    println!();
    let mut walk = SimplificationWalkthrough::default();
    while !walk.is_complete() {
        walk.reveal_next();
    }
    println!("{}", serde_json::to_string_pretty(&view_adapter::walkthrough_view(&walk)).unwrap());

    let (cats, dogs) = (parse_count(" 36 "), parse_count("48 dogs"));
    walk.set_counts(cats, dogs);
    let s = &walk.simplification;
    println!();
    println!("Custom: {} : {} ÷ {} = {} : {}", s.cats, s.dogs, s.divisor, s.reduced_cats, s.reduced_dogs);
}
