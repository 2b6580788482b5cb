//! User-visible notices and error modeling for the view-state controller.

use std::fmt;

use client_core::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Login,
    Register,
    LogMood,
    Recommendation,
    MoodHistory,
    DayEntries,
    Community,
    PublishPost,
    Like,
    Star,
    Share,
    Feedback,
    FeedbackHistory,
}

impl UiErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            UiErrorContext::Login => "login",
            UiErrorContext::Register => "register",
            UiErrorContext::LogMood => "log_mood",
            UiErrorContext::Recommendation => "recommendation",
            UiErrorContext::MoodHistory => "mood_history",
            UiErrorContext::DayEntries => "day_entries",
            UiErrorContext::Community => "community",
            UiErrorContext::PublishPost => "publish_post",
            UiErrorContext::Like => "like",
            UiErrorContext::Star => "star",
            UiErrorContext::Share => "share",
            UiErrorContext::Feedback => "feedback",
            UiErrorContext::FeedbackHistory => "feedback_history",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
    status: Option<u16>,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
            status: None,
        }
    }

    pub fn from_client(context: UiErrorContext, err: &ClientError) -> Self {
        Self {
            context,
            message: err.to_string(),
            status: err.status(),
        }
    }

    pub fn not_signed_in(context: UiErrorContext) -> Self {
        Self::new(context, "Please sign in first.")
    }

    pub fn requires_reauth(&self) -> bool {
        self.status == Some(401)
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UiError {}

/// Alert shown over the current screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(UiError),
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice::Info(message.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Info(message) => message,
            Notice::Error(err) => err.message(),
        }
    }
}
