//! # ratio_drill_gen
//!
//! An offline generator of ratio and fraction practice questions.
//!
//! The library produces multiple-choice questions with emoji visuals across
//! 7 question kinds (ratio to fraction, part to whole, equivalent ratios and
//! so on), scores them in a quiz session, and walks a learner through
//! simplifying a ratio with the greatest common divisor. Everything it
//! returns is plain data; [`view_adapter`] turns that data into JSON for a UI.
//!
//! ## How it works
//!
//! 1. Create a [`QuizSession`] from a [`QuizConfig`] and call
//!    [`QuizSession::start`]. The session draws its questions: a kind, an
//!    item category with two distinct items, and a small number pair.
//! 2. Feed the learner's choice to [`QuizSession::submit_answer`]; it returns
//!    an [`AnswerOutcome`] once per question.
//! 3. Call [`QuizSession::advance`] until it reports [`Advance::Finished`]
//!    with the final [`SessionSummary`].
//!
//! The simplification walkthrough is independent: [`simplify`] reduces a
//! pair and [`SimplificationWalkthrough`] tracks how many of its four steps
//! are revealed.
//!
//! ## Quick start
//!
//! ```rust
//! use ratio_drill_gen::{Advance, QuizConfig, QuizSession, SimplificationWalkthrough};
//!
//! let mut session = QuizSession::new(QuizConfig::default().seeded(42));
//! session.start(3);
//! loop {
//!     let answer = session.current_question().unwrap().correct_answer.clone();
//!     let outcome = session.submit_answer(&answer).unwrap();
//!     assert!(outcome.is_correct);
//!     if let Advance::Finished(summary) = session.advance() {
//!         assert_eq!(summary.percentage, 100);
//!         break;
//!     }
//! }
//!
//! let mut walk = SimplificationWalkthrough::new(25, 20);
//! walk.reveal_next();
//! assert_eq!(walk.simplification.divisor, 5);
//! ```

pub mod training_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `ratio_drill_gen::QuizSession`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    clamp_count, gcd, generate_question, generate_session, generate_with, parse_count,
    simplify, Advance, AnswerOutcome, Item, ItemCategory, Question, QuestionKind,
    QuestionRequest, QuizConfig, QuizError, QuizSession, ResultTier, SessionState,
    SessionSummary, Simplification, SimplificationWalkthrough, SimplifyStep, Visual,
};

#[cfg(test)]
mod tests;
