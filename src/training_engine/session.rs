//! Quiz session state machine.
//!
//! ```text
//! NotStarted --start--> InProgress --advance on last--> Finished
//!                       (each question: Unanswered --submit--> Answered --advance-->)
//! ```
//!
//! `restart` re-enters `InProgress` from any state. Transitions that do not
//! apply to the current state are no-ops.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    config::QuizConfig,
    generator::{generate_session, make_rng},
    models::{AnswerOutcome, Question, SessionState, SessionSummary},
};

/// Result of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Moved to the next question (1-based number).
    Next { question_number: usize },
    /// The last question was answered; the session is over.
    Finished(SessionSummary),
    /// Not in progress, or the current question is still unanswered.
    Ignored,
}

#[derive(Debug)]
pub struct QuizSession {
    config: QuizConfig,
    rng: StdRng,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    streak: u32,
    answered: bool,
    state: SessionState,
}

impl QuizSession {
    pub fn new(mut config: QuizConfig) -> Self {
        if config.streak_threshold == 0 {
            tracing::warn!("streak threshold 0 configured, using 1");
            config.streak_threshold = 1;
        }
        let rng = make_rng(config.rng_seed);
        Self {
            config,
            rng,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            streak: 0,
            answered: false,
            state: SessionState::NotStarted,
        }
    }

    /// Generate `n` fresh questions and reset all counters.
    pub fn start(&mut self, n: usize) {
        let n = if n == 0 {
            tracing::warn!("session length 0 requested, using 1");
            1
        } else {
            n
        };
        self.questions = generate_session(&mut self.rng, n);
        self.current_index = 0;
        self.score = 0;
        self.streak = 0;
        self.answered = false;
        self.state = SessionState::InProgress;
        tracing::debug!(total = n, "session started");
    }

    /// Start again with the same length (the configured length before the first start).
    pub fn restart(&mut self) {
        let n = if self.questions.is_empty() {
            self.config.total_questions
        } else {
            self.questions.len()
        };
        self.start(n);
    }

    /// Score `choice` against the current question.
    ///
    /// Returns `None` without touching any state when the session is not in
    /// progress or the current question was already answered.
    pub fn submit_answer(&mut self, choice: &str) -> Option<AnswerOutcome> {
        if self.state != SessionState::InProgress || self.answered {
            return None;
        }
        let question = &self.questions[self.current_index];
        let is_correct = question.is_correct(choice);
        if is_correct {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.answered = true;

        tracing::debug!(
            id = %question.question_id, is_correct, score = self.score, streak = self.streak,
            "answer submitted"
        );
        Some(AnswerOutcome {
            chosen: choice.to_string(),
            is_correct,
            correct_answer: question.correct_answer.clone(),
            explanation_text: question.explanation_text.clone(),
            score: self.score,
            streak: self.streak,
            show_streak: self.streak_visible(),
        })
    }

    pub fn advance(&mut self) -> Advance {
        if self.state != SessionState::InProgress || !self.answered {
            return Advance::Ignored;
        }
        if self.current_index + 1 == self.questions.len() {
            self.state = SessionState::Finished;
            let summary = SessionSummary::new(self.score, self.questions.len());
            tracing::debug!(score = summary.score, total = summary.total, tier = %summary.tier, "session finished");
            return Advance::Finished(summary);
        }
        self.current_index += 1;
        self.answered = false;
        Advance::Next { question_number: self.question_number() }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question being shown; `None` before the first start.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// 1-based position of the current question; 0 before the first start.
    pub fn question_number(&self) -> usize {
        if self.questions.is_empty() { 0 } else { self.current_index + 1 }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Questions answered so far (the "score / answered" counter).
    pub fn answered_count(&self) -> usize {
        match self.state {
            SessionState::NotStarted => 0,
            SessionState::Finished   => self.questions.len(),
            SessionState::InProgress => self.current_index + usize::from(self.answered),
        }
    }

    /// Share of questions already passed, for a progress bar.
    pub fn progress_percent(&self) -> f64 {
        match self.state {
            SessionState::NotStarted => 0.0,
            SessionState::Finished   => 100.0,
            SessionState::InProgress => 100.0 * self.current_index as f64 / self.questions.len() as f64,
        }
    }

    fn streak_visible(&self) -> bool {
        self.streak >= self.config.streak_threshold
    }

    /// Streak badge text, shown once the streak reaches the threshold.
    pub fn streak_display(&self) -> Option<String> {
        self.streak_visible().then(|| format!("🔥{}", self.streak))
    }

    /// Final score; `Some` only once finished.
    pub fn summary(&self) -> Option<SessionSummary> {
        (self.state == SessionState::Finished)
            .then(|| SessionSummary::new(self.score, self.questions.len()))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}
