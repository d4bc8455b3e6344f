use chrono::{DateTime, Duration, TimeZone, Utc};
use verse_memory::models::{grade, select_due};
use verse_memory::{MemorizedItem, MemoryCollection, Quality, ReviewOutcome, VerseReference};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 6, 30, 0).unwrap()
}

fn verse(reference: &str) -> MemorizedItem {
    let reference: VerseReference = reference.parse().unwrap();
    MemorizedItem::new(reference, "Thy word have I laid up in my heart", t0())
}

#[test]
fn fresh_verse_through_three_passing_reviews() {
    let item = verse("Psalms 119:11");
    let items = vec![item.clone()];
    assert_eq!(select_due(&items, t0()).len(), 1);

    let first = grade(&item, ReviewOutcome::Good.into(), t0());
    assert_eq!(first.interval, 1);
    assert_eq!(first.review_count, 1);
    assert_eq!(first.next_review, t0() + Duration::days(1));

    let t1 = first.next_review;
    let second = grade(&first, ReviewOutcome::Good.into(), t1);
    assert_eq!(second.interval, 6);
    assert_eq!(second.review_count, 2);
    assert_eq!(second.next_review, t0() + Duration::days(7));

    let prev_ease = second.ease_factor;
    let third = grade(&second, ReviewOutcome::Easy.into(), second.next_review);
    assert_eq!(third.review_count, 3);
    assert!((third.ease_factor - (prev_ease + 0.1)).abs() < 1e-9);
    assert_eq!(third.interval, (6.0 * prev_ease).round() as u32);
}

#[test]
fn every_grade_moves_item_out_of_due_set() {
    for value in 0..=5 {
        let item = verse("Joshua 1:8");
        let graded = grade(&item, Quality::new(value).unwrap(), t0());
        let items = vec![graded];
        assert!(select_due(&items, t0()).is_empty(), "quality {value}");
        assert_eq!(
            select_due(&items, t0() + Duration::days(1)).len(),
            1,
            "quality {value}"
        );
    }
}

#[test]
fn hard_after_long_interval_resets_to_one_day() {
    let mut item = verse("Isaiah 26:3");
    let mut now = t0();
    for _ in 0..5 {
        item = grade(&item, ReviewOutcome::Easy.into(), now);
        now = item.next_review;
    }
    assert!(item.interval > 6);
    let ease_before = item.ease_factor;

    let lapsed = grade(&item, ReviewOutcome::Hard.into(), now);
    assert_eq!(lapsed.interval, 1);
    assert_eq!(lapsed.ease_factor, ease_before);
    assert_eq!(lapsed.next_review, now + Duration::days(1));
}

#[test]
fn collection_queue_follows_insertion_order() {
    let mut collection = MemoryCollection::new();
    for reference in ["2 Tim 3:16", "Gen 1:1", "Rev 22:21"] {
        collection.add(verse(reference)).unwrap();
    }
    let graded = grade(&collection.items()[1], ReviewOutcome::Good.into(), t0());
    collection.apply(graded).unwrap();

    let due: Vec<String> = collection
        .due(t0())
        .iter()
        .map(|i| i.reference.to_string())
        .collect();
    assert_eq!(due, vec!["2 Timothy 3:16", "Revelation 22:21"]);
}
