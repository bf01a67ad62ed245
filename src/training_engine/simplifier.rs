//! GCD-based ratio simplification and its step-by-step walkthrough.
//!
//! [`simplify`] is pure arithmetic. [`SimplificationWalkthrough`] adds the
//! reveal counter a UI uses to show the four steps one at a time.

use serde::{Deserialize, Serialize};

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 50;
/// Index of the last step; the reveal counter never exceeds it.
pub const LAST_STEP: u8 = 3;

/// Greatest common divisor of `|a|` and `|b|` (Euclid). `gcd(a, 0) = |a|`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum SimplifyStep {
    /// The original pair, as a fraction and as a ratio.
    Start { cats: u32, dogs: u32 },
    /// Both counts factored by the shared divisor.
    FindGcd { cats: u32, dogs: u32, divisor: u32, reduced_cats: u32, reduced_dogs: u32 },
    /// Both counts divided by the divisor.
    Divide { cats: u32, dogs: u32, divisor: u32, reduced_cats: u32, reduced_dogs: u32 },
    /// The simplified pair.
    Result { reduced_cats: u32, reduced_dogs: u32 },
}

/// Arrow shown above a step when it is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub action: Option<String>,
    pub reason: Option<String>,
}

impl SimplifyStep {
    pub fn index(&self) -> u8 {
        match self {
            SimplifyStep::Start { .. }   => 0,
            SimplifyStep::FindGcd { .. } => 1,
            SimplifyStep::Divide { .. }  => 2,
            SimplifyStep::Result { .. }  => 3,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            SimplifyStep::Start { .. }   => "Start",
            SimplifyStep::FindGcd { .. } => "Step 1",
            SimplifyStep::Divide { .. }  => "Step 2",
            SimplifyStep::Result { .. }  => "Simplified!",
        }
    }

    pub fn description(&self) -> String {
        match *self {
            SimplifyStep::Start { cats, dogs } =>
                format!("We have {cats} 🐱 for every {dogs} 🐶"),
            SimplifyStep::FindGcd { divisor, .. } =>
                format!("Both numbers can be divided evenly by {divisor}"),
            SimplifyStep::Divide { divisor, .. } =>
                format!("Divide both numbers by {divisor}"),
            SimplifyStep::Result { reduced_cats, reduced_dogs } =>
                format!("For every {reduced_cats} 🐱, there are {reduced_dogs} 🐶!"),
        }
    }

    /// The arrow leading into this step; `None` for the first step.
    pub fn connector(&self) -> Option<Connector> {
        match *self {
            SimplifyStep::Start { .. } => None,
            SimplifyStep::FindGcd { cats, dogs, divisor, .. } => Some(Connector {
                action: Some(format!("÷ {divisor}")),
                reason: Some(format!("Both {cats} and {dogs} are divisible by {divisor}!")),
            }),
            SimplifyStep::Divide { divisor, .. } => Some(Connector {
                action: Some(format!("÷ {divisor}")),
                reason: None,
            }),
            SimplifyStep::Result { .. } => Some(Connector { action: None, reason: None }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplification {
    pub cats: u32,
    pub dogs: u32,
    pub divisor: u32,
    pub reduced_cats: u32,
    pub reduced_dogs: u32,
    pub steps: [SimplifyStep; 4],
}

/// Reduce `cats : dogs` by their GCD.
///
/// Counts are expected to be positive. A `0 : 0` pair has no GCD; it is
/// reported with a divisor of 1 and left unreduced.
pub fn simplify(cats: u32, dogs: u32) -> Simplification {
    // gcd of two u32 values fits in u32
    let divisor = (gcd(i64::from(cats), i64::from(dogs)) as u32).max(1);
    let (reduced_cats, reduced_dogs) = (cats / divisor, dogs / divisor);
    Simplification {
        cats,
        dogs,
        divisor,
        reduced_cats,
        reduced_dogs,
        steps: [
            SimplifyStep::Start { cats, dogs },
            SimplifyStep::FindGcd { cats, dogs, divisor, reduced_cats, reduced_dogs },
            SimplifyStep::Divide { cats, dogs, divisor, reduced_cats, reduced_dogs },
            SimplifyStep::Result { reduced_cats, reduced_dogs },
        ],
    }
}

/// Clamp a custom count into `[MIN_COUNT, MAX_COUNT]`.
pub fn clamp_count(value: i64) -> u32 {
    value.clamp(i64::from(MIN_COUNT), i64::from(MAX_COUNT)) as u32
}

/// Read a custom count from free text the way a lenient form field does.
///
/// Leading whitespace and an optional sign are accepted, then leading
/// digits; anything after them is ignored. Input with no digits, or a
/// value of zero, becomes 1. The result is clamped.
pub fn parse_count(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _          => (false, s),
    };
    let digits: &str = &digits[..digits.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return MIN_COUNT;
    }
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    let value = if negative { -magnitude } else { magnitude };
    if value == 0 {
        return MIN_COUNT;
    }
    let clamped = clamp_count(value);
    if i64::from(clamped) != value {
        tracing::warn!(input, clamped, "custom count out of range");
    }
    clamped
}

/// A simplification plus how many of its steps are revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplificationWalkthrough {
    pub simplification: Simplification,
    pub current_step: u8,
}

pub const DEFAULT_CATS: u32 = 25;
pub const DEFAULT_DOGS: u32 = 20;

impl Default for SimplificationWalkthrough {
    fn default() -> Self {
        Self::new(DEFAULT_CATS, DEFAULT_DOGS)
    }
}

impl SimplificationWalkthrough {
    pub fn new(cats: u32, dogs: u32) -> Self {
        Self { simplification: simplify(cats, dogs), current_step: 0 }
    }

    /// Recompute for new counts; the reveal counter starts over.
    pub fn set_counts(&mut self, cats: u32, dogs: u32) {
        self.simplification = simplify(cats, dogs);
        self.current_step = 0;
        tracing::debug!(cats, dogs, divisor = self.simplification.divisor, "walkthrough updated");
    }

    /// Reveal one more step; stays at the last step once reached.
    pub fn reveal_next(&mut self) -> u8 {
        self.current_step = (self.current_step + 1).min(LAST_STEP);
        self.current_step
    }

    pub fn reset_reveal(&mut self) {
        self.current_step = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= LAST_STEP
    }

    /// Steps `0..=current_step`.
    pub fn visible_steps(&self) -> &[SimplifyStep] {
        &self.simplification.steps[..=usize::from(self.current_step)]
    }
}
