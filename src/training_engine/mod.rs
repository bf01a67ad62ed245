//! Core training engine: question generation, quiz sessions and ratio simplification.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: items, question kinds, questions, session records |
//! | `catalog`    | Static item categories and the number-pair pool |
//! | `helpers`    | Formatting and builder functions shared by all kinds |
//! | `kinds`      | The 7 question kinds, grouped by skill |
//! | `generator`  | `generate_question()` / `generate_session()` — random draws + dispatch |
//! | `session`    | `QuizSession` state machine: answer, advance, finish |
//! | `simplifier` | GCD, `simplify()` and the step-reveal walkthrough |
//! | `config`     | `QuizConfig` with serde defaults |
//! | `error`      | `QuizError` for the config surface |

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod kinds;
pub mod models;
pub mod session;
pub mod simplifier;

pub use config::QuizConfig;
pub use error::QuizError;
pub use generator::{generate_question, generate_session, generate_with};
pub use models::{
    AnswerOutcome, Item, ItemCategory, Question, QuestionKind, QuestionRequest,
    ResultTier, SessionState, SessionSummary, Visual,
};
pub use session::{Advance, QuizSession};
pub use simplifier::{
    clamp_count, gcd, parse_count, simplify, Simplification, SimplificationWalkthrough,
    SimplifyStep,
};
