//! Unit tests for the `ratio_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical question; different seeds → varied output |
//! | Structural | Correct answer among the options; positive counts; ID prefixes; distinct items |
//! | Per-kind | Visual counts, answer notation |
//! | Session | Full runs, scoring, idempotent submit, streak display |
//! | Simplifier | Farm scenario, GCD properties on the custom-count range |

use crate::training_engine::{
    generate_question, helpers::id_prefix, simplify, Advance, QuestionKind, QuestionRequest,
    QuizConfig, QuizSession, ResultTier, SessionState,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(kind: QuestionKind, seed: u64) -> QuestionRequest {
    QuestionRequest::new(kind).seeded(seed)
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn seeded_session(seed: u64) -> QuizSession {
    QuizSession::new(QuizConfig::default().seeded(seed))
}

/// Submit the correct answer or a guaranteed-wrong one, then advance.
fn answer_and_advance(session: &mut QuizSession, correct: bool) -> Advance {
    let q = session.current_question().expect("session has a current question");
    let choice = if correct {
        q.correct_answer.clone()
    } else {
        format!("not {}", q.correct_answer)
    };
    let outcome = session.submit_answer(&choice).expect("first submit must be scored");
    assert_eq!(outcome.is_correct, correct);
    session.advance()
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_question() {
    for kind in QuestionKind::ALL {
        let a = generate_question(req(kind, 12345));
        let b = generate_question(req(kind, 12345));
        assert_eq!(a, b, "question mismatch for {kind:?}");
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_question(QuestionRequest::default().seeded(seed));
        let b = generate_question(QuestionRequest::default().seeded(seed + 500));
        if a.question_text == b.question_text {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical questions across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_question() {
    let q = generate_question(QuestionRequest::default());
    assert!(!q.question_id.is_empty());
    assert!(!q.question_text.is_empty());
    assert!(q.options.contains(&q.correct_answer));
}

#[test]
fn unpinned_requests_cover_every_kind() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..200u64 {
        seen.insert(generate_question(QuestionRequest::default().seeded(seed)).kind);
    }
    assert_eq!(seen.len(), QuestionKind::ALL.len(), "kinds seen: {seen:?}");
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_question_lists_its_correct_answer() {
    for kind in QuestionKind::ALL {
        for seed in SEEDS {
            let q = generate_question(req(kind, seed));
            assert_eq!(q.kind, kind);
            assert_eq!(q.options[0], q.correct_answer, "{kind:?} seed={seed}");
            assert!(q.is_correct(&q.correct_answer));
        }
    }
}

#[test]
fn every_question_has_positive_counts_and_distinct_items() {
    for kind in QuestionKind::ALL {
        for seed in SEEDS {
            let q = generate_question(req(kind, seed));
            assert!(q.visual.count1 > 0 && q.visual.count2 > 0, "{kind:?} seed={seed}");
            assert_ne!(q.visual.glyph1, q.visual.glyph2, "{kind:?} seed={seed}");
        }
    }
}

#[test]
fn every_question_has_text_and_explanation() {
    for kind in QuestionKind::ALL {
        let q = generate_question(req(kind, 77));
        assert!(!q.question_text.is_empty(), "Empty question for {kind:?}");
        assert!(!q.explanation_text.is_empty(), "Empty explanation for {kind:?}");
        assert!(q.options.iter().all(|o| !o.is_empty()), "Empty option for {kind:?}");
    }
}

#[test]
fn every_question_id_starts_with_kind_prefix() {
    for kind in QuestionKind::ALL {
        let q = generate_question(req(kind, 1));
        let prefix = format!("{}-", id_prefix(kind));
        assert!(
            q.question_id.starts_with(&prefix),
            "ID '{}' for {kind:?} does not start with '{prefix}'",
            q.question_id
        );
        assert_eq!(q.question_id.len(), prefix.len() + 8);
    }
}

// ── per-kind sanity checks ────────────────────────────────────────────────────

#[test]
fn simplify_ratio_visual_is_doubled() {
    for seed in SEEDS {
        let q = generate_question(req(QuestionKind::SimplifyRatio, seed));
        assert_eq!(q.visual.count1 % 2, 0);
        assert_eq!(q.visual.count2 % 2, 0);
        let expected = format!("{} : {}", q.visual.count1 / 2, q.visual.count2 / 2);
        assert_eq!(q.correct_answer, expected);
    }
}

#[test]
fn fraction_kinds_answer_with_a_slash() {
    for kind in [
        QuestionKind::RatioToFraction,
        QuestionKind::PartToWhole,
        QuestionKind::FractionComparison,
    ] {
        for seed in SEEDS {
            let q = generate_question(req(kind, seed));
            assert!(q.correct_answer.contains('/'), "{kind:?}: {}", q.correct_answer);
        }
    }
}

#[test]
fn ratio_kinds_answer_with_a_colon() {
    for kind in [
        QuestionKind::FractionToRatio,
        QuestionKind::EquivalentRatio,
        QuestionKind::SimplifyRatio,
    ] {
        for seed in SEEDS {
            let q = generate_question(req(kind, seed));
            assert!(q.correct_answer.contains(" : "), "{kind:?}: {}", q.correct_answer);
        }
    }
}

// ── session ───────────────────────────────────────────────────────────────────

#[test]
fn perfect_session_is_outstanding() {
    let mut session = seeded_session(2024);
    session.start(10);
    for i in 0..9 {
        let step = answer_and_advance(&mut session, true);
        assert_eq!(step, Advance::Next { question_number: i + 2 });
    }
    let last = answer_and_advance(&mut session, true);
    let Advance::Finished(summary) = last else {
        panic!("expected Finished, got {last:?}");
    };
    assert_eq!(summary.score, 10);
    assert_eq!(summary.total, 10);
    assert_eq!(summary.percentage, 100);
    assert_eq!(summary.tier, ResultTier::Outstanding);
    assert_eq!(session.state(), SessionState::Finished);
}

#[test]
fn score_counts_correct_submissions() {
    let pattern = [true, false, true, true, false, false, true, false, true, true];
    let mut session = seeded_session(31);
    session.start(pattern.len());
    for &correct in &pattern {
        answer_and_advance(&mut session, correct);
    }
    let expected = pattern.iter().filter(|c| **c).count();
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.score(), expected);
    let summary = session.summary().unwrap();
    assert_eq!(summary.percentage, 60);
    assert_eq!(summary.tier, ResultTier::Good);
}

#[test]
fn repeated_submit_leaves_state_unchanged() {
    let mut once = seeded_session(55);
    let mut twice = seeded_session(55);
    once.start(5);
    twice.start(5);

    let answer = once.current_question().unwrap().correct_answer.clone();
    once.submit_answer(&answer);
    twice.submit_answer(&answer);
    assert!(twice.submit_answer(&answer).is_none());

    assert_eq!(once.score(), twice.score());
    assert_eq!(once.streak(), twice.streak());
    assert_eq!(once.is_answered(), twice.is_answered());
    assert_eq!(once.question_number(), twice.question_number());
}

#[test]
fn streak_shows_at_three_and_clears_on_miss() {
    let mut session = seeded_session(8);
    session.start(6);
    for _ in 0..2 {
        answer_and_advance(&mut session, true);
        assert!(session.streak_display().is_none());
    }
    answer_and_advance(&mut session, true);
    assert_eq!(session.streak_display().as_deref(), Some("🔥3"));
    answer_and_advance(&mut session, true);
    assert_eq!(session.streak_display().as_deref(), Some("🔥4"));

    answer_and_advance(&mut session, false);
    assert_eq!(session.streak(), 0);
    assert!(session.streak_display().is_none());
}

#[test]
fn session_questions_are_independent_draws() {
    let mut session = seeded_session(101);
    session.start(25);
    let kinds: std::collections::HashSet<_> = session.questions().iter().map(|q| q.kind).collect();
    assert!(kinds.len() > 1, "25 draws produced a single kind");
}

// ── simplifier ────────────────────────────────────────────────────────────────

#[test]
fn farm_scenario_simplifies_to_five_to_four() {
    let s = simplify(25, 20);
    assert_eq!(s.divisor, 5);
    assert_eq!((s.reduced_cats, s.reduced_dogs), (5, 4));
    assert_eq!(s.steps.len(), 4);
}

#[test]
fn simplification_is_exact_over_custom_range() {
    for cats in 1..=50u32 {
        for dogs in 1..=50u32 {
            let s = simplify(cats, dogs);
            assert!(s.divisor >= 1);
            assert_eq!(s.reduced_cats * s.divisor, cats);
            assert_eq!(s.reduced_dogs * s.divisor, dogs);
            assert_eq!(simplify(s.reduced_cats, s.reduced_dogs).divisor, 1);
        }
    }
}
