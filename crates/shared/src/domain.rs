use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(MoodEntryId);
id_newtype!(RecommendationId);
id_newtype!(PostId);

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("intensity must be between 1 and 10, got {0}")]
pub struct IntensityOutOfRange(pub i64);

/// Mood intensity on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub fn new(value: u8) -> Result<Self, IntensityOutOfRange> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = IntensityOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_INTENSITY)..=i64::from(MAX_INTENSITY)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(IntensityOutOfRange(value))
        }
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The moods offered by the mood selector. Entries coming back from the
/// server keep their raw label, so this is only used for selection and
/// presentation lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Anxious,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Anxious, Mood::Excited];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(label.trim()))
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Excited => "🤩",
        }
    }

    /// Hex colour used to tint calendar cells and the selector.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Happy => "#FFD700",
            Mood::Sad => "#87CEEB",
            Mood::Anxious => "#DDA0DD",
            Mood::Excited => "#FF6B6B",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Excited => "Excited",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn mood_emoji(label: &str) -> &'static str {
    Mood::from_label(label).unwrap_or_default().emoji()
}

pub fn mood_color(label: &str) -> &'static str {
    Mood::from_label(label).unwrap_or_default().color()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn bearer(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: MoodEntryId,
    pub mood: String,
    pub intensity: Intensity,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<Utc>,
}

/// Accepts RFC 3339, offset-less ISO 8601 (read as UTC) and RFC 2822 / HTTP
/// dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp {raw:?}")))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub user_id: UserId,
    pub user_username: String,
    pub mood: String,
    #[serde(default)]
    pub activity_title: String,
    #[serde(default)]
    pub activity_description: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub mood_intensity: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub stars: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, rename = "isLiked")]
    pub is_liked: bool,
    #[serde(default, rename = "isStarred")]
    pub is_starred: bool,
}

impl CommunityPost {
    /// Flips the local like flag and moves the counter by one in the matching
    /// direction.
    pub fn toggle_like(&mut self) {
        self.likes += if self.is_liked { -1 } else { 1 };
        self.is_liked = !self.is_liked;
    }

    pub fn toggle_star(&mut self) {
        self.stars += if self.is_starred { -1 } else { 1 };
        self.is_starred = !self.is_starred;
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
