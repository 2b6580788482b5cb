mod config;
mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::HttpJournalClient;
use shared::{
    domain::{Intensity, Mood, PostId, MAX_INTENSITY, MIN_INTENSITY},
    protocol::CreatePostRequest,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use view_state::{keyboard::KeyInput, Action, AuthMode, Controller, FieldEdit, InputField, Screen};

#[derive(Parser, Debug)]
#[command(name = "mood_journal", about = "Terminal front-end for the mood journal")]
struct Args {
    /// Backend base URL, overrides the config file and environment.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One line typed into the command loop.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug)]
enum ReplCommand {
    /// Sign in with username (or email) and password.
    Login { identifier: String, password: String },
    /// Create an account from the auth form.
    Register,
    Mode { mode: ModeArg },
    /// Set a form field directly.
    Set {
        field: InputField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Open the on-screen keyboard for a field.
    Open { field: InputField },
    Type {
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    Key { key: KeyArg },
    Save,
    Cancel,
    Mood { mood: MoodArg },
    Intensity {
        #[arg(value_parser = clap::value_parser!(u8).range(MIN_INTENSITY as i64..=MAX_INTENSITY as i64))]
        value: u8,
    },
    Log,
    Recommend,
    Share,
    Feedback { verdict: Verdict },
    Community,
    Like { post_id: String },
    Star { post_id: String },
    /// Publish a post with the current mood and intensity.
    Post {
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    Calendar { direction: Direction },
    Day { date: NaiveDate },
    History,
    Go { screen: Screen },
    Dismiss,
    Reset,
    Quit,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Login,
    Register,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MoodArg {
    Happy,
    Sad,
    Anxious,
    Excited,
}

impl From<MoodArg> for Mood {
    fn from(value: MoodArg) -> Self {
        match value {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Sad => Mood::Sad,
            MoodArg::Anxious => Mood::Anxious,
            MoodArg::Excited => Mood::Excited,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Verdict {
    Like,
    Dislike,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Direction {
    Prev,
    Next,
}

/// `caps`, `space`, `backspace`, `clear`, or a single character.
#[derive(Clone, Copy, Debug)]
struct KeyArg(KeyInput);

impl std::str::FromStr for KeyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "caps" => KeyInput::ToggleCaps,
            "space" => KeyInput::Space,
            "backspace" => KeyInput::Backspace,
            "clear" => KeyInput::Clear,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyInput::Char(ch),
                    _ => return Err(format!("unknown key {other:?}")),
                }
            }
        };
        Ok(KeyArg(key))
    }
}

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref(), args.api_url.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = HttpJournalClient::new(&settings.api_base_url)?;
    info!(api = %client.base_url(), "starting mood journal");
    let mut controller = Controller::new(Arc::new(client));

    let mut snapshots = controller.subscribe();
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let state = snapshots.borrow_and_update();
            debug!(screen = %state.screen, loading = state.is_loading, "state published");
        }
    });

    println!("{}", render::render(controller.state(), today()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let command = match ReplLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if let Flow::Quit = run_command(&mut controller, command).await {
            break;
        }
        println!("{}", render::render(controller.state(), today()));
    }

    info!("bye");
    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Failed actions already surface as a notice on the snapshot, so their
/// `Err` values are dropped here.
async fn run_command(controller: &mut Controller, command: ReplCommand) -> Flow {
    controller.dispatch(Action::DismissNotice);
    match command {
        ReplCommand::Login {
            identifier,
            password,
        } => {
            controller.dispatch(Action::SetAuthMode(AuthMode::Login));
            controller.dispatch(Action::Edit(FieldEdit::Username(identifier)));
            controller.dispatch(Action::Edit(FieldEdit::Password(password)));
            let _ = controller.authenticate().await;
        }
        ReplCommand::Register => {
            controller.dispatch(Action::SetAuthMode(AuthMode::Register));
            let _ = controller.authenticate().await;
        }
        ReplCommand::Mode { mode } => controller.dispatch(Action::SetAuthMode(match mode {
            ModeArg::Login => AuthMode::Login,
            ModeArg::Register => AuthMode::Register,
        })),
        ReplCommand::Set { field, value } => {
            controller.dispatch(Action::Edit(field.edit_from(&value.join(" "))))
        }
        ReplCommand::Open { field } => controller.dispatch(Action::OpenInput(field)),
        ReplCommand::Type { text } => {
            for (i, word) in text.iter().enumerate() {
                if i > 0 {
                    controller.dispatch(Action::Key(KeyInput::Space));
                }
                for ch in word.chars() {
                    controller.dispatch(Action::Key(KeyInput::Char(ch)));
                }
            }
        }
        ReplCommand::Key { key } => controller.dispatch(Action::Key(key.0)),
        ReplCommand::Save => controller.dispatch(Action::SaveInput),
        ReplCommand::Cancel => controller.dispatch(Action::CancelInput),
        ReplCommand::Mood { mood } => controller.dispatch(Action::SelectMood(mood.into())),
        ReplCommand::Intensity { value } => {
            if let Ok(intensity) = Intensity::new(value) {
                controller.dispatch(Action::SetIntensity(intensity));
            }
        }
        ReplCommand::Log => {
            let _ = controller.submit_mood().await;
        }
        ReplCommand::Recommend => {
            let _ = controller.fetch_recommendation().await;
        }
        ReplCommand::Share => {
            let _ = controller.share_recommendation().await;
        }
        ReplCommand::Feedback { verdict } => {
            let _ = controller
                .submit_feedback(matches!(verdict, Verdict::Like))
                .await;
        }
        ReplCommand::Community => {
            let _ = controller.open_screen(Screen::Community).await;
        }
        ReplCommand::Like { post_id } => {
            let _ = controller.toggle_like(&PostId::new(post_id)).await;
        }
        ReplCommand::Star { post_id } => {
            let _ = controller.toggle_star(&PostId::new(post_id)).await;
        }
        ReplCommand::Post { description } => {
            let form = &controller.state().mood_form;
            let draft = CreatePostRequest {
                mood: form.mood.as_str().to_string(),
                mood_intensity: form.intensity,
                activity_title: String::new(),
                activity_description: String::new(),
                activity_type: String::new(),
                description: description.join(" "),
                note: form.note.clone(),
            };
            let _ = controller.publish_post(draft).await;
        }
        ReplCommand::Calendar { direction } => controller.dispatch(Action::ShiftCalendar(
            match direction {
                Direction::Prev => -1,
                Direction::Next => 1,
            },
        )),
        ReplCommand::Day { date } => {
            let _ = controller.open_day(date).await;
        }
        ReplCommand::History => {
            let _ = controller.load_feedback_history().await;
        }
        ReplCommand::Go { screen } => {
            let _ = controller.open_screen(screen).await;
        }
        ReplCommand::Dismiss => {}
        ReplCommand::Reset => controller.reset(),
        ReplCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
