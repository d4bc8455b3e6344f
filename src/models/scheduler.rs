//! Due-set selection for building review queues.
use super::MemorizedItem;
use chrono::{DateTime, Utc};

/// Items whose `next_review` is at or before `now`, in input order.
pub fn select_due<'a, I>(items: I, now: DateTime<Utc>) -> Vec<&'a MemorizedItem>
where
    I: IntoIterator<Item = &'a MemorizedItem>,
{
    items.into_iter().filter(|item| item.is_due(now)).collect()
}

/// [`select_due`] against the wall clock.
pub fn select_due_now<'a, I>(items: I) -> Vec<&'a MemorizedItem>
where
    I: IntoIterator<Item = &'a MemorizedItem>,
{
    select_due(items, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VerseReference;
    use chrono::{Duration, TimeZone};

    fn item_due_at(verse: u32, next_review: DateTime<Utc>) -> MemorizedItem {
        let reference = VerseReference::new("Romans", 8, verse).unwrap();
        MemorizedItem {
            next_review,
            ..MemorizedItem::new(reference, "", next_review)
        }
    }

    #[test]
    fn test_due_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let items = vec![
            item_due_at(1, now - Duration::days(1)),
            item_due_at(2, now),
            item_due_at(3, now + Duration::days(1)),
        ];

        let due = select_due(&items, now);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].reference.verse, 1);
        assert_eq!(due[1].reference.verse, 2);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let late = item_due_at(28, now - Duration::hours(2));
        let early = item_due_at(1, now - Duration::days(9));
        let items = vec![late.clone(), early.clone(), late.clone()];

        let due = select_due(&items, now);
        let verses: Vec<u32> = due.iter().map(|i| i.reference.verse).collect();
        assert_eq!(verses, vec![28, 1, 28]);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<MemorizedItem> = Vec::new();
        assert!(select_due(&items, Utc::now()).is_empty());
        assert!(select_due_now(&items).is_empty());
    }
}
