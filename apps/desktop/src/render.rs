//! Plain-text rendering of an [`AppState`] snapshot.

use chrono::NaiveDate;
use shared::domain::{mood_emoji, Mood, MoodEntry, MAX_INTENSITY};
use view_state::{
    calendar::{decorated_cells, DayCell, WEEKDAY_HEADERS},
    keyboard::{LETTER_ROWS, NUMBER_ROW, SYMBOL_ROW},
    state::{InputKind, InputModal},
    AppState, AuthMode, InputField, Notice, Screen,
};

const RULE: &str = "----------------------------------------";
const INPUT_PLACEHOLDER: &str = "Enter text...";

pub fn render(state: &AppState, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", screen_title(state.screen)));
    if let Some(session) = &state.session {
        out.push_str(&format!("signed in as {}\n", session.user.username));
    }
    if state.is_loading {
        out.push_str("loading...\n");
    }
    if let Some(notice) = &state.notice {
        out.push_str(&render_notice(notice));
    }
    out.push_str(RULE);
    out.push('\n');

    match state.screen {
        Screen::Auth => render_auth(state, &mut out),
        Screen::Main => render_main(state, today, &mut out),
        Screen::MoodLog => render_mood_form(state, &mut out),
        Screen::Recommendations => render_recommendations(state, &mut out),
        Screen::Community => render_community(state, &mut out),
        Screen::DayDetail => render_day(state, &mut out),
    }

    if let Some(modal) = &state.input_modal {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&render_modal(modal));
    }
    out
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Auth => "Mood Journal",
        Screen::Main => "Your Mood Calendar",
        Screen::MoodLog => "How are you feeling?",
        Screen::Recommendations => "Recommendations",
        Screen::Community => "Community",
        Screen::DayDetail => "Day Entries",
    }
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(message) => format!("[info] {message}\n"),
        Notice::Error(err) => format!("[error:{}] {}\n", err.context().as_str(), err.message()),
    }
}

fn render_auth(state: &AppState, out: &mut String) {
    let form = &state.auth;
    out.push_str(&format!("mode: {}\n", state.auth_mode.as_str()));
    out.push_str(&format!("username: {}\n", form.username));
    out.push_str(&format!(
        "password: {}\n",
        "•".repeat(form.password.chars().count())
    ));
    if state.auth_mode == AuthMode::Register {
        out.push_str(&format!("email: {}\n", form.email));
        out.push_str(&format!("age: {}\n", form.age));
        out.push_str(&format!("nationality: {}\n", form.nationality));
        out.push_str(&format!("gender: {}\n", form.gender));
        out.push_str(&format!("hobbies: {}\n", form.hobbies.join(", ")));
    }
}

fn render_main(state: &AppState, today: NaiveDate, out: &mut String) {
    let month = state.calendar_month;
    out.push_str(&format!("{:^28}\n", month.title()));
    out.push_str(&calendar_grid(&decorated_cells(
        month,
        &state.mood_log,
        today,
        state.selected_date,
    )));
    out.push_str(&format!("{} entries logged\n", state.mood_log.len()));
}

/// Seven cells per row. `*` marks today, `>` the selected day and days
/// outside the month are dimmed with parentheses.
pub fn calendar_grid(cells: &[DayCell]) -> String {
    let mut out = String::new();
    for header in WEEKDAY_HEADERS {
        out.push_str(&format!("{header:>4}"));
    }
    out.push('\n');
    for week in cells.chunks(7) {
        for cell in week {
            out.push_str(&format_cell(cell));
        }
        out.push('\n');
        let moods: String = week
            .iter()
            .map(|cell| match &cell.mood {
                Some(mood) if cell.in_month => format!("{:>4}", mood_emoji(mood)),
                _ => "    ".to_string(),
            })
            .collect();
        if !moods.trim().is_empty() {
            out.push_str(&moods);
            out.push('\n');
        }
    }
    out
}

fn format_cell(cell: &DayCell) -> String {
    let day = cell.key.date().format("%d").to_string();
    let day = day.trim_start_matches('0');
    let marker = if cell.is_selected {
        '>'
    } else if cell.is_today {
        '*'
    } else {
        ' '
    };
    if cell.in_month {
        format!("{marker}{day:>3}")
    } else {
        format!("{marker}{:>3}", format!("({day})"))
    }
}

fn render_mood_form(state: &AppState, out: &mut String) {
    let form = &state.mood_form;
    let selector: Vec<String> = Mood::ALL
        .into_iter()
        .map(|mood| {
            let label = format!("{} {}", mood.emoji(), mood.display_name());
            if mood == form.mood {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    out.push_str(&selector.join("  "));
    out.push('\n');
    out.push_str(&format!(
        "intensity: {}/{}\n",
        form.intensity.get(),
        MAX_INTENSITY
    ));
    out.push_str(&format!(
        "{}: {}\n",
        InputField::MoodDescription.label(),
        form.description
    ));
    out.push_str(&format!("{}: {}\n", InputField::MoodNote.label(), form.note));
}

fn render_recommendations(state: &AppState, out: &mut String) {
    match &state.current_recommendation {
        Some(rec) => {
            out.push_str(&format!("{} ({})\n", rec.title, rec.kind));
            out.push_str(&format!("{}\n", rec.description));
            if !rec.reasoning.is_empty() {
                out.push_str(&format!("why: {}\n", rec.reasoning));
            }
            if !rec.category.is_empty() {
                out.push_str(&format!("category: {}\n", rec.category));
            }
        }
        None => out.push_str("No recommendation yet. Ask for one with `recommend`.\n"),
    }
    if let Some(history) = &state.feedback_history {
        let count = history.as_array().map_or(0, Vec::len);
        out.push_str(&format!("feedback history: {count} item(s)\n"));
    }
}

fn render_community(state: &AppState, out: &mut String) {
    if state.community_posts.is_empty() {
        out.push_str("No posts yet.\n");
        return;
    }
    for post in &state.community_posts {
        out.push_str(&format!(
            "{} {} @{} ({}/10)\n",
            post.id,
            mood_emoji(&post.mood),
            post.user_username,
            post.mood_intensity
        ));
        if !post.activity_title.is_empty() {
            out.push_str(&format!("  {}\n", post.activity_title));
        }
        if !post.description.is_empty() {
            out.push_str(&format!("  {}\n", post.description));
        }
        out.push_str(&format!(
            "  {} {}  {} {}\n",
            if post.is_liked { "♥" } else { "♡" },
            post.likes,
            if post.is_starred { "★" } else { "☆" },
            post.stars
        ));
    }
}

fn render_day(state: &AppState, out: &mut String) {
    if let Some(date) = state.selected_date {
        out.push_str(&format!("{}\n", date.format("%A, %B %-d, %Y")));
    }
    if state.day_entries.is_empty() {
        out.push_str("No entries for this day.\n");
    }
    for entry in &state.day_entries {
        out.push_str(&format_entry(entry));
    }
}

fn format_entry(entry: &MoodEntry) -> String {
    let mut line = format!(
        "{} {} {} {}/10",
        entry.date.format("%H:%M"),
        mood_emoji(&entry.mood),
        entry.mood,
        entry.intensity.get()
    );
    if !entry.description.is_empty() {
        line.push_str(&format!(" - {}", entry.description));
    }
    if !entry.note.is_empty() {
        line.push_str(&format!(" ({})", entry.note));
    }
    line.push('\n');
    line
}

pub fn render_modal(modal: &InputModal) -> String {
    let keyboard = &modal.keyboard;
    let mut out = format!("{}\n", modal.field.label());
    let shown = keyboard.display(INPUT_PLACEHOLDER);
    match modal.field.kind() {
        InputKind::Text => out.push_str(&format!("> {shown}\n")),
        InputKind::TextArea => out.push_str(&format!("| {shown}\n|\n")),
    }

    let row = |keys: &mut dyn Iterator<Item = char>| -> String {
        keys.map(|ch| keyboard.key_label(ch))
            .collect::<Vec<_>>()
            .join(" ")
    };
    out.push_str(&row(&mut NUMBER_ROW.into_iter()));
    out.push('\n');
    out.push_str(&row(&mut SYMBOL_ROW.into_iter()));
    out.push('\n');
    for letters in LETTER_ROWS {
        out.push_str(&row(&mut letters.chars()));
        out.push('\n');
    }
    out.push_str(&format!("[{}] [Space] [⌫] [Clear]\n", keyboard.caps_label()));
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
