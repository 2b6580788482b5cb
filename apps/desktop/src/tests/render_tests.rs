use super::*;

use shared::domain::{Intensity, MoodEntryId};
use view_state::{
    calendar::YearMonth, keyboard::KeyInput, reduce, Action, FieldEdit, UiError, UiErrorContext,
};

fn march_2024() -> AppState {
    let mut state = AppState::new(NaiveDate::from_ymd_opt(2024, 3, 14).expect("date"));
    state.calendar_month = YearMonth::new(2024, 3).expect("month");
    state
}

#[test]
fn auth_screen_masks_password() {
    let state = reduce(
        march_2024(),
        Action::Edit(FieldEdit::Password("hunter2".into())),
    );
    let text = render(&state, NaiveDate::from_ymd_opt(2024, 3, 14).expect("date"));
    assert!(text.contains("password: •••••••"));
    assert!(!text.contains("hunter2"));
    assert!(!text.contains("email:"));
}

#[test]
fn register_mode_shows_profile_fields() {
    let state = reduce(march_2024(), Action::SetAuthMode(AuthMode::Register));
    let text = render(&state, NaiveDate::from_ymd_opt(2024, 3, 14).expect("date"));
    assert!(text.contains("hobbies: reading, music"));
    assert!(text.contains("nationality: American"));
}

#[test]
fn calendar_grid_has_header_and_whole_weeks() {
    let state = march_2024();
    let today = NaiveDate::from_ymd_opt(2024, 3, 14).expect("date");
    let cells = decorated_cells(state.calendar_month, &state.mood_log, today, None);
    let grid = calendar_grid(&cells);
    let lines: Vec<&str> = grid.lines().collect();

    assert!(lines[0].starts_with(" Sun"));
    // March 2024 starts on a Friday and spans six Sunday-first weeks.
    assert_eq!(lines.len(), 1 + 6);
    assert!(lines[1].contains("(25)"));
    assert!(grid.contains("* 14"));
}

#[test]
fn logged_days_show_mood_row() {
    let mut state = reduce(
        march_2024(),
        Action::MoodHistoryLoaded(vec![MoodEntry {
            id: MoodEntryId::new("m1"),
            mood: "sad".into(),
            intensity: Intensity::new(4).expect("intensity"),
            note: String::new(),
            description: String::new(),
            date: "2024-03-05T10:00:00Z".parse().expect("timestamp"),
        }]),
    );
    state = reduce(state, Action::Navigate(Screen::Main));
    let text = render(&state, NaiveDate::from_ymd_opt(2024, 3, 14).expect("date"));
    assert!(text.contains("March 2024"));
    assert!(text.contains("😢"));
    assert!(text.contains("1 entries logged"));
}

#[test]
fn notices_carry_their_context() {
    let err = UiError::new(UiErrorContext::Like, "rate limited");
    assert_eq!(
        render_notice(&Notice::Error(err)),
        "[error:like] rate limited\n"
    );
    assert_eq!(render_notice(&Notice::info("saved")), "[info] saved\n");
}

#[test]
fn modal_shows_caps_labels_and_masked_buffer() {
    let mut state = reduce(march_2024(), Action::OpenInput(InputField::Password));
    for key in [KeyInput::Char('a'), KeyInput::ToggleCaps] {
        state = reduce(state, Action::Key(key));
    }
    let modal = state.input_modal.as_ref().expect("modal");
    let text = render_modal(modal);

    assert!(text.starts_with("Password\n> •\n"));
    assert!(text.contains("Q W E R T Y U I O P"));
    assert!(text.contains("@ _ . -"));
    assert!(text.contains("[Caps On]"));
}

#[test]
fn empty_modal_shows_placeholder_until_typed() {
    let mut state = reduce(march_2024(), Action::OpenInput(InputField::MoodNote));
    let modal = state.input_modal.as_ref().expect("modal");
    assert!(render_modal(modal).starts_with("Additional notes\n| Enter text...\n"));

    state = reduce(state, Action::Key(KeyInput::Char('x')));
    let modal = state.input_modal.as_ref().expect("modal");
    assert!(render_modal(modal).contains("| x\n"));
}

#[test]
fn day_detail_lists_entries_or_placeholder() {
    let mut state = reduce(
        march_2024(),
        Action::SelectDate(NaiveDate::from_ymd_opt(2024, 3, 5).expect("date")),
    );
    state = reduce(state, Action::Navigate(Screen::DayDetail));
    let today = NaiveDate::from_ymd_opt(2024, 3, 14).expect("date");
    assert!(render(&state, today).contains("No entries for this day."));

    state = reduce(
        state,
        Action::DayEntriesLoaded(vec![MoodEntry {
            id: MoodEntryId::new("m2"),
            mood: "excited".into(),
            intensity: Intensity::new(9).expect("intensity"),
            note: "with friends".into(),
            description: "concert".into(),
            date: "2024-03-05T21:30:00Z".parse().expect("timestamp"),
        }]),
    );
    let text = render(&state, today);
    assert!(text.contains("Tuesday, March 5, 2024"));
    assert!(text.contains("21:30 🤩 excited 9/10 - concert (with friends)"));
}
