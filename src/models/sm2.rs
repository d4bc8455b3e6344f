//! SM-2 (SuperMemo 2) review scheduling for memory verses.
//!
//! - Quality 0-2: failed recall, interval resets to 1 day, ease untouched
//! - Quality 3-5: interval steps 1 day → 6 days → interval × EF, then EF is adjusted
//! - EF never drops below 1.3

use super::memorized_item::{INITIAL_INTERVAL, MIN_EASE_FACTOR, normalize_ease};
use super::{MemorizedItem, Quality};
use chrono::{DateTime, Duration, Utc};

/// Grades one review of `item` and returns the rescheduled copy.
///
/// The interval for the third and later passes is taken from the ease
/// factor held before this review's adjustment. Rounding is half away
/// from zero.
pub fn grade(item: &MemorizedItem, quality: Quality, now: DateTime<Utc>) -> MemorizedItem {
    let mut ease_factor = normalize_ease(item.ease_factor);
    let current_interval = item.interval.max(INITIAL_INTERVAL);

    let interval = if quality.passed() {
        let interval = match item.review_count {
            0 => 1,
            1 => 6,
            _ => (f64::from(current_interval) * ease_factor).round() as u32,
        };
        // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))
        let miss = f64::from(Quality::MAX - quality.value());
        ease_factor += 0.1 - miss * (0.08 + miss * 0.02);
        interval
    } else {
        INITIAL_INTERVAL
    };

    if ease_factor < MIN_EASE_FACTOR {
        ease_factor = MIN_EASE_FACTOR;
    }
    let interval = interval.max(INITIAL_INTERVAL);

    MemorizedItem {
        ease_factor,
        interval,
        next_review: next_review_after(now, interval),
        review_count: item.review_count.saturating_add(1),
        ..item.clone()
    }
}

fn next_review_after(now: DateTime<Utc>, interval: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(interval)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
