//! A scripture passage the learner is memorizing, with its SM-2 state.
use super::VerseReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const INITIAL_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const INITIAL_INTERVAL: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemorizedItem {
    pub id: String,
    #[serde(flatten)]
    pub reference: VerseReference,
    pub text: String,
    pub ease_factor: f64,
    pub interval: u32,
    pub next_review: DateTime<Utc>,
    pub review_count: u32,
    pub date_added: DateTime<Utc>,
}

impl MemorizedItem {
    /// New items are due immediately.
    pub fn new(reference: VerseReference, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reference,
            text: text.into(),
            ease_factor: INITIAL_EASE_FACTOR,
            interval: INITIAL_INTERVAL,
            next_review: now,
            review_count: 0,
            date_added: now,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Repairs scheduling fields that violate the ease and interval floors.
    pub fn normalized(mut self) -> Self {
        self.ease_factor = normalize_ease(self.ease_factor);
        self.interval = self.interval.max(INITIAL_INTERVAL);
        self
    }
}

pub(crate) fn normalize_ease(ease: f64) -> f64 {
    if ease.is_finite() {
        ease.max(MIN_EASE_FACTOR)
    } else {
        MIN_EASE_FACTOR
    }
}
