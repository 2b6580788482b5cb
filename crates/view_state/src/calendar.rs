//! Month grid for the calendar screen.
//!
//! Grids run Sunday through Saturday and are padded with days from the
//! adjacent months so that every row is a full week.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::mood_log::{DayKey, MoodLog};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month, stored as its first day so navigation never overflows
/// into a neighbouring month the way day-preserving arithmetic can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn last_day(self) -> NaiveDate {
        self.first
            .iter_days()
            .take_while(|day| day.month() == self.first.month())
            .last()
            .unwrap_or(self.first)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Moves by whole months; stays put if the target is outside chrono's range.
    pub fn shift(self, months: i32) -> Self {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.first.checked_add_months(step)
        } else {
            self.first.checked_sub_months(step)
        };
        shifted.map(|first| Self { first }).unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    /// e.g. "March 2024".
    pub fn title(self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

pub fn month_cells(month: YearMonth) -> Vec<CalendarCell> {
    let first = month.first_day();
    let last = month.last_day();
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    let mut cells = Vec::with_capacity(42);
    for date in start.iter_days() {
        if date > last && date.weekday() == Weekday::Sun {
            break;
        }
        cells.push(CalendarCell {
            date,
            in_month: month.contains(date),
        });
    }
    cells
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: DayKey,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub mood: Option<String>,
}

pub fn decorated_cells(
    month: YearMonth,
    log: &MoodLog,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<DayCell> {
    month_cells(month)
        .into_iter()
        .map(|cell| {
            let key = DayKey::from_date(cell.date);
            DayCell {
                date: cell.date,
                key,
                in_month: cell.in_month,
                is_today: cell.date == today,
                is_selected: selected == Some(cell.date),
                mood: log.latest_mood_on(key).map(str::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/calendar_tests.rs"]
mod tests;
