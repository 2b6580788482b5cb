//! Flat and per-day views over logged mood entries.

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use shared::domain::MoodEntry;

/// Calendar-day bucket for an entry, rendered as zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Buckets by the UTC calendar day of the timestamp, ignoring time of day.
    pub fn of(timestamp: &DateTime<Utc>) -> Self {
        Self(timestamp.date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

pub fn group_by_day(entries: &[MoodEntry]) -> BTreeMap<DayKey, Vec<MoodEntry>> {
    let mut grouped: BTreeMap<DayKey, Vec<MoodEntry>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(DayKey::of(&entry.date))
            .or_default()
            .push(entry.clone());
    }
    grouped
}

/// Ordered list of entries plus its day grouping. Both views are private and
/// only change together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
    by_day: BTreeMap<DayKey, Vec<MoodEntry>>,
}

impl MoodLog {
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        let by_day = group_by_day(&entries);
        Self { entries, by_day }
    }

    pub fn push(&mut self, entry: MoodEntry) {
        self.by_day
            .entry(DayKey::of(&entry.date))
            .or_default()
            .push(entry.clone());
        self.entries.push(entry);
    }

    pub fn replace_all(&mut self, entries: Vec<MoodEntry>) {
        *self = Self::from_entries(entries);
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn by_day(&self) -> &BTreeMap<DayKey, Vec<MoodEntry>> {
        &self.by_day
    }

    pub fn on_day(&self, key: DayKey) -> &[MoodEntry] {
        self.by_day.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_entries_on(&self, key: DayKey) -> bool {
        !self.on_day(key).is_empty()
    }

    /// Mood of the most recently appended entry for the day.
    pub fn latest_mood_on(&self, key: DayKey) -> Option<&str> {
        self.on_day(key).last().map(|entry| entry.mood.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/mood_log_tests.rs"]
mod tests;
