use super::*;
use chrono::{DateTime, Utc};
use shared::domain::{Intensity, MoodEntry, MoodEntryId};

fn assert_grid_invariants(month: YearMonth) {
    let cells = month_cells(month);
    assert_eq!(cells.len() % 7, 0, "{} has a partial week", month.title());
    assert_eq!(cells[0].date.weekday(), Weekday::Sun);
    assert_eq!(cells[cells.len() - 1].date.weekday(), Weekday::Sat);

    let in_month: Vec<_> = cells.iter().filter(|cell| cell.in_month).collect();
    assert_eq!(in_month.len() as u32, month.last_day().day());
    for (index, cell) in in_month.iter().enumerate() {
        assert_eq!(cell.date.day(), index as u32 + 1);
    }
    for pair in cells.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }
}

#[test]
fn every_month_of_several_years_fills_whole_weeks() {
    for year in 2019..=2028 {
        for month in 1..=12 {
            assert_grid_invariants(YearMonth::new(year, month).expect("month"));
        }
    }
}

#[test]
fn february_starting_on_sunday_needs_no_padding() {
    // February 2015 begins on a Sunday and has exactly four weeks.
    let month = YearMonth::new(2015, 2).expect("month");
    let cells = month_cells(month);
    assert_eq!(cells.len(), 28);
    assert!(cells.iter().all(|cell| cell.in_month));
}

#[test]
fn leading_and_trailing_days_come_from_neighbours() {
    // March 2024 starts on a Friday and ends on a Sunday.
    let cells = month_cells(YearMonth::new(2024, 3).expect("month"));
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).expect("date"));
    assert!(!cells[0].in_month);
    assert_eq!(
        cells[41].date,
        NaiveDate::from_ymd_opt(2024, 4, 6).expect("date")
    );
}

#[test]
fn shifting_from_month_end_does_not_skip_months() {
    let jan = YearMonth::of(NaiveDate::from_ymd_opt(2024, 1, 31).expect("date"));
    assert_eq!(jan.next(), YearMonth::new(2024, 2).expect("month"));
    assert_eq!(jan.previous(), YearMonth::new(2023, 12).expect("month"));
    assert_eq!(jan.shift(13), YearMonth::new(2025, 2).expect("month"));
    assert_eq!(jan.title(), "January 2024");
}

#[test]
fn decorated_cells_mark_today_selection_and_latest_mood() {
    let entry = |id: &str, mood: &str, at: &str| MoodEntry {
        id: MoodEntryId::new(id),
        mood: mood.to_string(),
        intensity: Intensity::default(),
        note: String::new(),
        description: String::new(),
        date: at.parse::<DateTime<Utc>>().expect("timestamp"),
    };
    let log = MoodLog::from_entries(vec![
        entry("a", "happy", "2024-03-05T08:00:00Z"),
        entry("b", "sad", "2024-03-05T20:00:00Z"),
    ]);
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).expect("date");
    let selected = NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");

    let cells = decorated_cells(
        YearMonth::new(2024, 3).expect("month"),
        &log,
        today,
        Some(selected),
    );

    let fifth = cells.iter().find(|cell| cell.date == selected).expect("cell");
    assert!(fifth.is_selected);
    assert_eq!(fifth.mood.as_deref(), Some("sad"));
    assert_eq!(fifth.key.to_string(), "2024-03-05");
    assert_eq!(cells.iter().filter(|cell| cell.is_today).count(), 1);
    assert_eq!(cells.iter().filter(|cell| cell.mood.is_some()).count(), 1);
}
