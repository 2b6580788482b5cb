use super::*;
use chrono::TimeZone;
use shared::domain::{Intensity, MoodEntryId};

fn entry(id: &str, mood: &str, timestamp: &str) -> MoodEntry {
    MoodEntry {
        id: MoodEntryId::new(id),
        mood: mood.to_string(),
        intensity: Intensity::default(),
        note: String::new(),
        description: String::new(),
        date: timestamp.parse().expect("timestamp"),
    }
}

#[test]
fn day_key_is_zero_padded() {
    let key = DayKey::from_date(NaiveDate::from_ymd_opt(987, 3, 4).expect("date"));
    assert_eq!(key.to_string(), "0987-03-04");
    let parsed: DayKey = "2024-12-01".parse().expect("parse");
    assert_eq!(parsed.to_string(), "2024-12-01");
}

#[test]
fn day_key_ignores_time_of_day() {
    let morning = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 1).unwrap();
    let night = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 59).unwrap();
    assert_eq!(DayKey::of(&morning), DayKey::of(&night));
    assert_eq!(DayKey::of(&night).to_string(), "2024-05-01");
}

#[test]
fn push_keeps_grouping_in_step_with_flat_list() {
    let mut log = MoodLog::default();
    log.push(entry("a", "happy", "2024-05-01T08:00:00Z"));
    log.push(entry("b", "sad", "2024-05-02T09:00:00Z"));
    log.push(entry("c", "anxious", "2024-05-01T21:30:00Z"));

    assert_eq!(log.len(), 3);
    assert_eq!(log.by_day(), &group_by_day(log.entries()));

    let first = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"));
    assert_eq!(log.on_day(first).len(), 2);
    assert_eq!(log.latest_mood_on(first), Some("anxious"));
}

#[test]
fn replace_all_rebuilds_grouping() {
    let mut log = MoodLog::from_entries(vec![entry("a", "happy", "2024-05-01T08:00:00Z")]);
    log.replace_all(vec![
        entry("x", "excited", "2024-06-10T10:00:00Z"),
        entry("y", "sad", "2024-06-11T10:00:00Z"),
    ]);

    assert_eq!(log.by_day().len(), 2);
    assert_eq!(log.by_day(), &group_by_day(log.entries()));
    let old = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"));
    assert!(!log.has_entries_on(old));
}

#[test]
fn empty_day_has_no_mood() {
    let log = MoodLog::default();
    let key = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
    assert!(log.on_day(key).is_empty());
    assert_eq!(log.latest_mood_on(key), None);
    assert!(log.is_empty());
}
