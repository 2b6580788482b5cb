//! Pure state transitions. Every UI event and every completed request is an
//! [`Action`]; [`reduce`] consumes the previous snapshot and returns the next.

use chrono::NaiveDate;
use serde_json::Value;
use shared::domain::{
    CommunityPost, Intensity, Mood, MoodEntry, PostId, Recommendation, Session,
};

use crate::{
    events::Notice,
    keyboard::KeyInput,
    state::{AppState, AuthMode, FieldEdit, InputField, InputModal, Screen},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Screen),
    SetAuthMode(AuthMode),
    Edit(FieldEdit),
    SelectMood(Mood),
    SetIntensity(Intensity),
    OpenInput(InputField),
    Key(KeyInput),
    SaveInput,
    CancelInput,
    ShiftCalendar(i32),
    SelectDate(NaiveDate),
    LoadingStarted,
    LoadingFinished,
    SessionStarted(Session),
    MoodHistoryLoaded(Vec<MoodEntry>),
    DayEntriesLoaded(Vec<MoodEntry>),
    MoodLogged(MoodEntry),
    RecommendationLoaded(Recommendation),
    RecommendationCleared,
    CommunityLoaded(Vec<CommunityPost>),
    LikeToggled(PostId),
    StarToggled(PostId),
    FeedbackHistoryLoaded(Value),
    Notify(Notice),
    DismissNotice,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::SetAuthMode(_) => "set_auth_mode",
            Action::Edit(_) => "edit",
            Action::SelectMood(_) => "select_mood",
            Action::SetIntensity(_) => "set_intensity",
            Action::OpenInput(_) => "open_input",
            Action::Key(_) => "key",
            Action::SaveInput => "save_input",
            Action::CancelInput => "cancel_input",
            Action::ShiftCalendar(_) => "shift_calendar",
            Action::SelectDate(_) => "select_date",
            Action::LoadingStarted => "loading_started",
            Action::LoadingFinished => "loading_finished",
            Action::SessionStarted(_) => "session_started",
            Action::MoodHistoryLoaded(_) => "mood_history_loaded",
            Action::DayEntriesLoaded(_) => "day_entries_loaded",
            Action::MoodLogged(_) => "mood_logged",
            Action::RecommendationLoaded(_) => "recommendation_loaded",
            Action::RecommendationCleared => "recommendation_cleared",
            Action::CommunityLoaded(_) => "community_loaded",
            Action::LikeToggled(_) => "like_toggled",
            Action::StarToggled(_) => "star_toggled",
            Action::FeedbackHistoryLoaded(_) => "feedback_history_loaded",
            Action::Notify(_) => "notify",
            Action::DismissNotice => "dismiss_notice",
            Action::Reset => "reset",
        }
    }
}

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Navigate(screen) => state.screen = screen,
        Action::SetAuthMode(mode) => state.auth_mode = mode,
        Action::Edit(edit) => apply_edit(&mut state, edit),
        Action::SelectMood(mood) => state.mood_form.mood = mood,
        Action::SetIntensity(intensity) => state.mood_form.intensity = intensity,
        Action::OpenInput(field) => {
            let current = field.current_value(&state);
            state.input_modal = Some(InputModal::open(field, current));
        }
        Action::Key(key) => {
            if let Some(modal) = state.input_modal.as_mut() {
                modal.keyboard.press(key);
            }
        }
        Action::SaveInput => {
            if let Some(modal) = state.input_modal.take() {
                let edit = modal.field.edit_from(modal.keyboard.buffer());
                apply_edit(&mut state, edit);
            }
        }
        Action::CancelInput => state.input_modal = None,
        Action::ShiftCalendar(months) => state.calendar_month = state.calendar_month.shift(months),
        Action::SelectDate(date) => {
            state.selected_date = Some(date);
            state.day_entries.clear();
        }
        Action::LoadingStarted => state.is_loading = true,
        Action::LoadingFinished => state.is_loading = false,
        Action::SessionStarted(session) => {
            state.session = Some(session);
            state.screen = Screen::Main;
        }
        Action::MoodHistoryLoaded(entries) => state.mood_log.replace_all(entries),
        Action::DayEntriesLoaded(entries) => state.day_entries = entries,
        Action::MoodLogged(entry) => {
            state.mood_log.push(entry);
            state.current_recommendation = None;
            state.screen = Screen::Recommendations;
        }
        Action::RecommendationLoaded(recommendation) => {
            state.current_recommendation = Some(recommendation)
        }
        Action::RecommendationCleared => state.current_recommendation = None,
        Action::CommunityLoaded(posts) => state.community_posts = posts,
        Action::LikeToggled(post_id) => {
            if let Some(post) = find_post(&mut state, &post_id) {
                post.toggle_like();
            }
        }
        Action::StarToggled(post_id) => {
            if let Some(post) = find_post(&mut state, &post_id) {
                post.toggle_star();
            }
        }
        Action::FeedbackHistoryLoaded(history) => state.feedback_history = Some(history),
        Action::Notify(notice) => state.notice = Some(notice),
        Action::DismissNotice => state.notice = None,
        Action::Reset => {
            let month = state.calendar_month;
            state = AppState::default();
            state.calendar_month = month;
        }
    }
    state
}

fn apply_edit(state: &mut AppState, edit: FieldEdit) {
    let auth = &mut state.auth;
    match edit {
        FieldEdit::Username(value) => auth.username = value,
        FieldEdit::Email(value) => auth.email = value,
        FieldEdit::Password(value) => auth.password = value,
        FieldEdit::Age(value) => auth.age = value,
        FieldEdit::Gender(value) => auth.gender = value,
        FieldEdit::Nationality(value) => auth.nationality = value,
        FieldEdit::Hobbies(value) => auth.hobbies = value,
        FieldEdit::MoodDescription(value) => state.mood_form.description = value,
        FieldEdit::MoodNote(value) => state.mood_form.note = value,
    }
}

fn find_post<'a>(state: &'a mut AppState, post_id: &PostId) -> Option<&'a mut CommunityPost> {
    state
        .community_posts
        .iter_mut()
        .find(|post| &post.id == post_id)
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
