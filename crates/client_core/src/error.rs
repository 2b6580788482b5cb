use std::fmt;

use thiserror::Error;

/// Remote operations exposed by the journal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    LogMood,
    ListMoodEntries,
    CreatePost,
    ListPosts,
    LikePost,
    StarPost,
    ShareRecommendation,
    GetRecommendation,
    SubmitFeedback,
    FeedbackHistory,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Register => "register",
            Endpoint::LogMood => "log_mood",
            Endpoint::ListMoodEntries => "list_mood_entries",
            Endpoint::CreatePost => "create_post",
            Endpoint::ListPosts => "list_posts",
            Endpoint::LikePost => "like_post",
            Endpoint::StarPost => "star_post",
            Endpoint::ShareRecommendation => "share_recommendation",
            Endpoint::GetRecommendation => "get_recommendation",
            Endpoint::SubmitFeedback => "submit_feedback",
            Endpoint::FeedbackHistory => "feedback_history",
        }
    }

    /// Message surfaced when a failed response carries no `error` field.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Endpoint::Login => "Login failed",
            Endpoint::Register => "Registration failed",
            Endpoint::LogMood => "Failed to log mood",
            Endpoint::ListMoodEntries => "Failed to get mood history",
            Endpoint::CreatePost => "Failed to create post",
            Endpoint::ListPosts => "Failed to get community posts",
            Endpoint::LikePost => "Failed to like post",
            Endpoint::StarPost => "Failed to star post",
            Endpoint::ShareRecommendation => "Failed to share recommendation",
            Endpoint::GetRecommendation => "Failed to get recommendations",
            Endpoint::SubmitFeedback => "Failed to submit feedback",
            Endpoint::FeedbackHistory => "Failed to get feedback history",
        }
    }

    pub fn requires_token(self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Register)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Api {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        source: reqwest::Error,
    },
    #[error("{endpoint} returned an unreadable body: {source}")]
    Decode {
        endpoint: Endpoint,
        source: reqwest::Error,
    },
    #[error("invalid api base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("api base url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

impl ClientError {
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            ClientError::Api { endpoint, .. }
            | ClientError::Transport { endpoint, .. }
            | ClientError::Decode { endpoint, .. } => Some(*endpoint),
            ClientError::InvalidBaseUrl { .. } | ClientError::UnsupportedScheme(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
