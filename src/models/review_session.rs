//! Review session management for memory verse practice.
//! Walks the due queue once, grading each verse with SM-2.

use super::scheduler::select_due;
use super::sm2::grade;
use super::{MemorizedItem, MemoryCollection, Quality};
use chrono::{DateTime, Utc};

/// A single pass over the verses due at the time the session started.
/// Graded items are handed back to the caller, which owns persistence.
pub struct ReviewSession {
    queue: Vec<MemorizedItem>,
    current_index: usize,
    show_answer: bool,
}

impl ReviewSession {
    /// Snapshots the due verses of `collection`, keeping collection order.
    pub fn new_from_due(collection: &MemoryCollection, now: DateTime<Utc>) -> Self {
        let queue: Vec<MemorizedItem> = select_due(collection, now).into_iter().cloned().collect();
        tracing::debug!("Review session started with {} due verses", queue.len());

        Self {
            queue,
            current_index: 0,
            show_answer: false,
        }
    }

    pub fn current(&self) -> Option<&MemorizedItem> {
        self.queue.get(self.current_index)
    }

    pub fn reveal(&mut self) {
        self.show_answer = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.show_answer
    }

    /// Grades the current verse and moves to the next one.
    /// Returns the rescheduled item, or `None` once the session is over.
    pub fn grade_current(&mut self, quality: Quality, now: DateTime<Utc>) -> Option<MemorizedItem> {
        let item = self.queue.get_mut(self.current_index)?;
        let graded = grade(item, quality, now);
        *item = graded.clone();

        self.current_index += 1;
        self.show_answer = false;
        Some(graded)
    }

    /// Zero-based index of the verse being reviewed.
    pub fn position(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.queue.len()
    }

    pub fn remaining(&self) -> usize {
        self.total().saturating_sub(self.current_index)
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.queue.len()
    }

    pub fn progress_message(&self) -> String {
        format!(
            "{} of {}",
            (self.current_index + 1).min(self.total()),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewOutcome;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 5, 6, 0, 0).unwrap()
    }

    fn create_test_collection() -> MemoryCollection {
        let mut collection = MemoryCollection::new();
        for reference in ["Joshua 1:9", "Proverbs 3:5", "Matthew 6:33"] {
            collection
                .add(MemorizedItem::new(reference.parse().unwrap(), "", now()))
                .unwrap();
        }
        // Proverbs 3:5 is not due yet
        let mut later = collection.items()[1].clone();
        later.next_review = now() + Duration::days(2);
        collection.apply(later).unwrap();
        collection
    }

    #[test]
    fn test_queue_contains_only_due_items() {
        let session = ReviewSession::new_from_due(&create_test_collection(), now());
        assert_eq!(session.total(), 2);
        assert_eq!(session.current().unwrap().reference.book, "Joshua");
        assert_eq!(session.progress_message(), "1 of 2");
    }

    #[test]
    fn test_grading_advances_and_completes() {
        let mut session = ReviewSession::new_from_due(&create_test_collection(), now());

        session.reveal();
        assert!(session.is_revealed());
        let first = session.grade_current(ReviewOutcome::Hard.into(), now()).unwrap();
        assert_eq!(first.reference.book, "Joshua");
        assert_eq!(first.review_count, 1);
        assert!(!session.is_revealed());
        assert_eq!(session.position(), 1);
        assert_eq!(session.remaining(), 1);
        assert_eq!(session.progress_message(), "2 of 2");

        let second = session.grade_current(ReviewOutcome::Easy.into(), now()).unwrap();
        assert_eq!(second.reference.book, "Matthew");
        assert!(session.is_completed());
        assert!(session.current().is_none());
        assert!(session.grade_current(ReviewOutcome::Good.into(), now()).is_none());
    }

    #[test]
    fn test_empty_session_is_completed() {
        let session = ReviewSession::new_from_due(&MemoryCollection::new(), now());
        assert!(session.is_completed());
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.progress_message(), "0 of 0");
    }
}
