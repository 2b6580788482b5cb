use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use shared::{
    domain::{CommunityPost, Intensity, Mood, MoodEntry, PostId, Recommendation, Session},
    protocol::{LogMoodRequest, RecommendationRequest, RegisterRequest},
};

use crate::{calendar::YearMonth, events::Notice, keyboard::VirtualKeyboard, mood_log::MoodLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Auth,
    Main,
    MoodLog,
    Recommendations,
    Community,
    DayDetail,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Auth,
        Screen::Main,
        Screen::MoodLog,
        Screen::Recommendations,
        Screen::Community,
        Screen::DayDetail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Auth => "auth",
            Screen::Main => "main",
            Screen::MoodLog => "mood-log",
            Screen::Recommendations => "recommendations",
            Screen::Community => "community",
            Screen::DayDetail => "day-detail",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == s.trim())
            .ok_or_else(|| format!("unknown screen {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub nationality: String,
    pub gender: String,
    pub hobbies: Vec<String>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            age: 25,
            nationality: "American".into(),
            gender: "Prefer not to say".into(),
            hobbies: vec!["reading".into(), "music".into()],
        }
    }
}

impl AuthForm {
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            age: self.age,
            nationality: self.nationality.clone(),
            gender: self.gender.clone(),
            hobbies: self.hobbies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoodForm {
    pub mood: Mood,
    pub intensity: Intensity,
    pub note: String,
    pub description: String,
}

impl MoodForm {
    pub fn log_request(&self) -> LogMoodRequest {
        LogMoodRequest {
            mood: self.mood.as_str().to_string(),
            intensity: self.intensity,
            note: self.note.clone(),
            description: self.description.clone(),
        }
    }

    /// Adds the request time to both the nonce and the description so the
    /// backend treats every request as new.
    pub fn recommendation_request(&self, now: DateTime<Utc>) -> RecommendationRequest {
        let clock = now.format("%H:%M:%S");
        let description = if self.description.is_empty() {
            format!("Requested at {clock}")
        } else {
            format!("{} (requested at {clock})", self.description)
        };
        RecommendationRequest {
            mood: self.mood.as_str().to_string(),
            intensity: self.intensity,
            note: self.note.clone(),
            description,
            timestamp: now.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
}

/// Form fields editable through the input modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Username,
    Email,
    Age,
    Gender,
    Nationality,
    Hobbies,
    Password,
    MoodDescription,
    MoodNote,
}

impl InputField {
    pub const ALL: [InputField; 9] = [
        InputField::Username,
        InputField::Email,
        InputField::Age,
        InputField::Gender,
        InputField::Nationality,
        InputField::Hobbies,
        InputField::Password,
        InputField::MoodDescription,
        InputField::MoodNote,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputField::Username => "username",
            InputField::Email => "email",
            InputField::Age => "age",
            InputField::Gender => "gender",
            InputField::Nationality => "nationality",
            InputField::Hobbies => "hobbies",
            InputField::Password => "password",
            InputField::MoodDescription => "description",
            InputField::MoodNote => "note",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Username => "Username",
            InputField::Email => "Email",
            InputField::Age => "Age",
            InputField::Gender => "Gender",
            InputField::Nationality => "Nationality",
            InputField::Hobbies => "Hobbies",
            InputField::Password => "Password",
            InputField::MoodDescription => "What happened today?",
            InputField::MoodNote => "Additional notes",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            InputField::MoodDescription | InputField::MoodNote => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }

    pub fn is_masked(self) -> bool {
        self == InputField::Password
    }

    pub fn current_value(self, state: &AppState) -> String {
        let auth = &state.auth;
        match self {
            InputField::Username => auth.username.clone(),
            InputField::Email => auth.email.clone(),
            InputField::Age => auth.age.to_string(),
            InputField::Gender => auth.gender.clone(),
            InputField::Nationality => auth.nationality.clone(),
            InputField::Hobbies => auth.hobbies.join(", "),
            InputField::Password => auth.password.clone(),
            InputField::MoodDescription => state.mood_form.description.clone(),
            InputField::MoodNote => state.mood_form.note.clone(),
        }
    }

    /// Converts raw modal text into a typed edit. Unparsable ages become 0 and
    /// hobbies are comma separated with blanks dropped.
    pub fn edit_from(self, raw: &str) -> FieldEdit {
        let text = raw.to_string();
        match self {
            InputField::Username => FieldEdit::Username(text),
            InputField::Email => FieldEdit::Email(text),
            InputField::Age => FieldEdit::Age(raw.trim().parse().unwrap_or(0)),
            InputField::Gender => FieldEdit::Gender(text),
            InputField::Nationality => FieldEdit::Nationality(text),
            InputField::Hobbies => FieldEdit::Hobbies(
                raw.split(',')
                    .map(str::trim)
                    .filter(|hobby| !hobby.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            InputField::Password => FieldEdit::Password(text),
            InputField::MoodDescription => FieldEdit::MoodDescription(text),
            InputField::MoodNote => FieldEdit::MoodNote(text),
        }
    }
}

impl FromStr for InputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputField::ALL
            .into_iter()
            .find(|field| field.name() == s.trim())
            .ok_or_else(|| format!("unknown field {s:?}"))
    }
}

/// One variant per editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Username(String),
    Email(String),
    Password(String),
    Age(u32),
    Gender(String),
    Nationality(String),
    Hobbies(Vec<String>),
    MoodDescription(String),
    MoodNote(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputModal {
    pub field: InputField,
    pub keyboard: VirtualKeyboard,
}

impl InputModal {
    pub fn open(field: InputField, current: String) -> Self {
        Self {
            field,
            keyboard: VirtualKeyboard::new(current, field.is_masked()),
        }
    }
}

/// Snapshot of everything the UI shows. Produced anew by the reducer for
/// every action.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub is_loading: bool,
    pub session: Option<Session>,
    pub auth_mode: AuthMode,
    pub auth: AuthForm,
    pub mood_form: MoodForm,
    pub mood_log: MoodLog,
    pub community_posts: Vec<CommunityPost>,
    pub current_recommendation: Option<Recommendation>,
    pub calendar_month: YearMonth,
    pub selected_date: Option<NaiveDate>,
    pub day_entries: Vec<MoodEntry>,
    pub feedback_history: Option<Value>,
    pub input_modal: Option<InputModal>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            screen: Screen::Auth,
            is_loading: false,
            session: None,
            auth_mode: AuthMode::Login,
            auth: AuthForm::default(),
            mood_form: MoodForm::default(),
            mood_log: MoodLog::default(),
            community_posts: Vec::new(),
            current_recommendation: None,
            calendar_month: YearMonth::of(today),
            selected_date: None,
            day_entries: Vec::new(),
            feedback_history: None,
            input_modal: None,
            notice: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::bearer)
    }

    pub fn post(&self, post_id: &PostId) -> Option<&CommunityPost> {
        self.community_posts.iter().find(|post| &post.id == post_id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}
