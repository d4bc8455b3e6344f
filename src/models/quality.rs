//! Recall grades fed into the SM-2 scheduler.
use crate::error::{Result, VerseError};
use std::fmt;
use std::str::FromStr;

/// Self-reported recall grade, 0 (blackout) to 5 (effortless).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;
    pub const PASS: u8 = 3;

    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(q) if q <= Self::MAX => Ok(Self(q)),
            _ => Err(VerseError::InvalidQuality(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn passed(self) -> bool {
        self.0 >= Self::PASS
    }
}

impl TryFrom<u8> for Quality {
    type Error = VerseError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<ReviewOutcome> for Quality {
    fn from(outcome: ReviewOutcome) -> Self {
        Self(outcome.quality_value())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = VerseError;

    /// Accepts a named outcome (`hard`, `good`, `easy`) or a bare 0-5 integer.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(outcome) = s.parse::<ReviewOutcome>() {
            return Ok(outcome.into());
        }
        let value = s
            .parse::<i64>()
            .map_err(|_| VerseError::InvalidGrade(s.to_string()))?;
        Self::new(value)
    }
}

/// The three buttons offered during review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewOutcome {
    Hard,
    Good,
    Easy,
}

impl ReviewOutcome {
    fn quality_value(self) -> u8 {
        match self {
            Self::Hard => 2,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }
}

impl FromStr for ReviewOutcome {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" | "h" => Ok(Self::Hard),
            "good" | "g" => Ok(Self::Good),
            "easy" | "e" => Ok(Self::Easy),
            _ => Err(VerseError::InvalidGrade(s.to_string())),
        }
    }
}
