use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::training_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Item primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Animals,
    Food,
    Objects,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::Animals => write!(f, "animals"),
            ItemCategory::Food    => write!(f, "food"),
            ItemCategory::Objects => write!(f, "objects"),
        }
    }
}

/// One countable thing shown in a question, e.g. `cat` / 🐱.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub label: &'static str,
    pub glyph: &'static str,
}

impl Item {
    /// Naive plural used in question text ("cats", "sheeps").
    pub fn plural(self) -> String {
        format!("{}s", self.label)
    }
}

// ---------------------------------------------------------------------------
// Question kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    RatioToFraction,
    FractionToRatio,
    PartToWhole,
    RatioMeaning,
    EquivalentRatio,
    SimplifyRatio,
    FractionComparison,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 7] = [
        QuestionKind::RatioToFraction,
        QuestionKind::FractionToRatio,
        QuestionKind::PartToWhole,
        QuestionKind::RatioMeaning,
        QuestionKind::EquivalentRatio,
        QuestionKind::SimplifyRatio,
        QuestionKind::FractionComparison,
    ];

    /// Stable tag, identical to the serialized form.
    pub fn tag(self) -> &'static str {
        match self {
            QuestionKind::RatioToFraction    => "ratio-to-fraction",
            QuestionKind::FractionToRatio    => "fraction-to-ratio",
            QuestionKind::PartToWhole        => "part-to-whole",
            QuestionKind::RatioMeaning       => "ratio-meaning",
            QuestionKind::EquivalentRatio    => "equivalent-ratio",
            QuestionKind::SimplifyRatio      => "simplify-ratio",
            QuestionKind::FractionComparison => "fraction-comparison",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::RatioToFraction    => "Ratio to Fraction",
            QuestionKind::FractionToRatio    => "Fraction to Ratio",
            QuestionKind::PartToWhole        => "Part to Whole",
            QuestionKind::RatioMeaning       => "Ratio Meaning",
            QuestionKind::EquivalentRatio    => "Equivalent Ratio",
            QuestionKind::SimplifyRatio      => "Simplify Ratio",
            QuestionKind::FractionComparison => "Fraction Comparison",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| QuizError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request / question types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// Pin a kind; `None` picks one uniformly.
    pub kind: Option<QuestionKind>,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    pub fn new(kind: QuestionKind) -> Self {
        Self { kind: Some(kind), rng_seed: None }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    pub glyph1: String,
    pub count1: u32,
    pub glyph2: String,
    pub count2: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub kind: QuestionKind,
    pub visual: Visual,
    pub question_text: String,
    pub correct_answer: String,
    /// Canonical order: the correct answer first, then the three distractors.
    pub options: [String; 4],
    pub explanation_text: String,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

// ---------------------------------------------------------------------------
// Session records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}

/// What the caller renders after an answer is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub chosen: String,
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation_text: String,
    pub score: usize,
    pub streak: u32,
    pub show_streak: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTier {
    Outstanding,
    Great,
    Good,
    KeepGoing,
}

impl ResultTier {
    /// Inclusive lower bounds: 90, 70, 50.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => ResultTier::Outstanding,
            70.. => ResultTier::Great,
            50.. => ResultTier::Good,
            _    => ResultTier::KeepGoing,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResultTier::Outstanding => "🏆",
            ResultTier::Great       => "🎉",
            ResultTier::Good        => "👍",
            ResultTier::KeepGoing   => "💪",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResultTier::Outstanding => "Outstanding!",
            ResultTier::Great       => "Great Job!",
            ResultTier::Good        => "Good Effort!",
            ResultTier::KeepGoing   => "Keep Going!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Outstanding => "You've mastered ratios and fractions! They're like old friends now.",
            ResultTier::Great       => "You're getting the hang of ratios and fractions!",
            ResultTier::Good        => "Keep practicing! Ratios and fractions will become easier.",
            ResultTier::KeepGoing   => "Review the concepts and try again. You'll get it!",
        }
    }
}

impl fmt::Display for ResultTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultTier::Outstanding => "Outstanding",
            ResultTier::Great       => "Great",
            ResultTier::Good        => "Good",
            ResultTier::KeepGoing   => "Keep Going",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
}

impl SessionSummary {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * score as f64 / total as f64).round() as u32
        };
        SessionSummary { score, total, percentage, tier: ResultTier::from_percentage(percentage) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip_through_from_str() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.tag().parse::<QuestionKind>().unwrap(), kind);
        }
        assert!(matches!(
            "ratio-to-decimal".parse::<QuestionKind>(),
            Err(QuizError::UnknownKind(_))
        ));
    }

    #[test]
    fn kind_serializes_as_kebab_tag() {
        let json = serde_json::to_string(&QuestionKind::SimplifyRatio).unwrap();
        assert_eq!(json, "\"simplify-ratio\"");
    }

    #[test]
    fn tier_bands_use_inclusive_lower_bounds() {
        assert_eq!(ResultTier::from_percentage(100), ResultTier::Outstanding);
        assert_eq!(ResultTier::from_percentage(90), ResultTier::Outstanding);
        assert_eq!(ResultTier::from_percentage(89), ResultTier::Great);
        assert_eq!(ResultTier::from_percentage(70), ResultTier::Great);
        assert_eq!(ResultTier::from_percentage(69), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(50), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(49), ResultTier::KeepGoing);
        assert_eq!(ResultTier::from_percentage(0), ResultTier::KeepGoing);
    }

    #[test]
    fn summary_rounds_percentage() {
        // 2/3 = 66.67 -> 67
        assert_eq!(SessionSummary::new(2, 3).percentage, 67);
        // 1/8 = 12.5 -> 13
        assert_eq!(SessionSummary::new(1, 8).percentage, 13);
        let s = SessionSummary::new(7, 10);
        assert_eq!(s.percentage, 70);
        assert_eq!(s.tier, ResultTier::Great);
    }

    #[test]
    fn plural_appends_s() {
        let item = Item { label: "sheep", glyph: "🐑" };
        assert_eq!(item.plural(), "sheeps");
    }
}
