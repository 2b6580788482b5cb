//! Drives remote calls from UI actions and folds their results back into
//! state through the reducer.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use client_core::{ClientError, JournalApi};
use shared::{
    domain::{MoodEntry, PostId, Session},
    protocol::{CreatePostRequest, RecommendationFeedbackRequest, ShareRecommendationRequest},
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    events::{Notice, UiError, UiErrorContext},
    reducer::{reduce, Action},
    state::{AppState, AuthMode, Screen},
};

pub const SHARE_SUCCESS: &str = "Recommendation shared successfully to the community!";
pub const SHARE_FAILURE: &str = "Failed to share recommendation. Please try again.";
pub const FEEDBACK_FAILURE: &str = "Failed to submit feedback. Please try again.";
pub const POST_PUBLISHED: &str = "Your post is live in the community feed.";

/// Sole owner and writer of [`AppState`]. Every mutation goes through
/// [`Controller::dispatch`], which publishes the new snapshot to subscribers.
pub struct Controller {
    api: Arc<dyn JournalApi>,
    state: AppState,
    snapshots: watch::Sender<AppState>,
}

impl Controller {
    pub fn new(api: Arc<dyn JournalApi>) -> Self {
        Self::with_state(api, AppState::default())
    }

    pub fn with_state(api: Arc<dyn JournalApi>, state: AppState) -> Self {
        let (snapshots, _) = watch::channel(state.clone());
        Self {
            api,
            state,
            snapshots,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.snapshots.subscribe()
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "dispatching ui action");
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
        self.snapshots.send_replace(self.state.clone());
    }

    fn report(&mut self, context: UiErrorContext, err: &ClientError) -> UiError {
        error!(context = context.as_str(), error = %err, "journal request failed");
        let ui_error = UiError::from_client(context, err);
        self.dispatch(Action::Notify(Notice::Error(ui_error.clone())));
        ui_error
    }

    fn report_with_message(
        &mut self,
        context: UiErrorContext,
        err: &ClientError,
        message: &str,
    ) -> UiError {
        error!(context = context.as_str(), error = %err, "journal request failed");
        let ui_error = UiError::new(context, message);
        self.dispatch(Action::Notify(Notice::Error(ui_error.clone())));
        ui_error
    }

    fn require_token(&mut self, context: UiErrorContext) -> Result<String, UiError> {
        match self.state.token() {
            Some(token) => Ok(token.to_string()),
            None => {
                warn!(context = context.as_str(), "action requires a session");
                let ui_error = UiError::not_signed_in(context);
                self.dispatch(Action::Notify(Notice::Error(ui_error.clone())));
                Err(ui_error)
            }
        }
    }

    /// Logs in or registers with the auth form, depending on the selected mode.
    pub async fn authenticate(&mut self) -> Result<(), UiError> {
        let api = Arc::clone(&self.api);
        let mode = self.state.auth_mode;
        let form = self.state.auth.clone();
        let context = match mode {
            AuthMode::Login => UiErrorContext::Login,
            AuthMode::Register => UiErrorContext::Register,
        };
        info!(mode = mode.as_str(), username = %form.username, "authenticating");

        self.dispatch(Action::LoadingStarted);
        let result = match mode {
            AuthMode::Login => api.login(&form.username, &form.password).await,
            AuthMode::Register => api.register(&form.register_request()).await,
        };
        self.dispatch(Action::LoadingFinished);

        let auth = result.map_err(|err| self.report(context, &err))?;
        if auth.token.trim().is_empty() {
            warn!(mode = mode.as_str(), "server accepted credentials without a token");
            let ui_error = UiError::new(context, "Server did not return a session token");
            self.dispatch(Action::Notify(Notice::Error(ui_error.clone())));
            return Err(ui_error);
        }

        info!(user = %auth.user.username, "session started");
        self.dispatch(Action::SessionStarted(Session {
            user: auth.user,
            token: auth.token,
        }));
        let _ = self.refresh_mood_history().await;
        Ok(())
    }

    /// Reloads all entries for the calendar. Failures are logged only.
    pub async fn refresh_mood_history(&mut self) -> Result<(), UiError> {
        let Some(token) = self.state.token().map(str::to_string) else {
            return Err(UiError::not_signed_in(UiErrorContext::MoodHistory));
        };
        let api = Arc::clone(&self.api);
        match api.list_mood_entries(&token, None).await {
            Ok(entries) => {
                debug!(count = entries.len(), "mood history loaded");
                self.dispatch(Action::MoodHistoryLoaded(entries));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load mood entries for calendar");
                Err(UiError::from_client(UiErrorContext::MoodHistory, &err))
            }
        }
    }

    /// Logs the mood form. The entry is stamped with the local clock once the
    /// server has assigned an id.
    pub async fn submit_mood(&mut self) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::LogMood)?;
        let api = Arc::clone(&self.api);
        let form = self.state.mood_form.clone();

        self.dispatch(Action::LoadingStarted);
        let result = api.log_mood(&token, &form.log_request()).await;
        self.dispatch(Action::LoadingFinished);

        let response = result.map_err(|err| self.report(UiErrorContext::LogMood, &err))?;
        let entry = MoodEntry {
            id: response.mood_id,
            mood: form.mood.as_str().to_string(),
            intensity: form.intensity,
            note: form.note,
            description: form.description,
            date: Utc::now(),
        };
        info!(entry = %entry.id, mood = %entry.mood, "mood logged");
        self.dispatch(Action::MoodLogged(entry));
        Ok(())
    }

    pub async fn fetch_recommendation(&mut self) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::Recommendation)?;
        let api = Arc::clone(&self.api);
        let request = self.state.mood_form.recommendation_request(Utc::now());

        self.dispatch(Action::LoadingStarted);
        let result = api.get_recommendation(&token, &request).await;
        self.dispatch(Action::LoadingFinished);

        let recommendation =
            result.map_err(|err| self.report(UiErrorContext::Recommendation, &err))?;
        info!(recommendation = %recommendation.id, "recommendation received");
        self.dispatch(Action::RecommendationLoaded(recommendation));
        Ok(())
    }

    pub async fn fetch_community_posts(&mut self) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::Community)?;
        let api = Arc::clone(&self.api);

        self.dispatch(Action::LoadingStarted);
        let result = api.list_community_posts(&token).await;
        self.dispatch(Action::LoadingFinished);

        let posts = result.map_err(|err| self.report(UiErrorContext::Community, &err))?;
        debug!(count = posts.len(), "community posts loaded");
        self.dispatch(Action::CommunityLoaded(posts));
        Ok(())
    }

    /// Likes or unlikes a post. The local counter moves only after the
    /// server accepted the request and is never reconciled afterwards.
    pub async fn toggle_like(&mut self, post_id: &PostId) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::Like)?;
        let api = Arc::clone(&self.api);
        match api.like_post(&token, post_id).await {
            Ok(_) => {
                self.dispatch(Action::LikeToggled(post_id.clone()));
                Ok(())
            }
            Err(err) => {
                warn!(post = %post_id, error = %err, "like post failed");
                Err(UiError::from_client(UiErrorContext::Like, &err))
            }
        }
    }

    pub async fn toggle_star(&mut self, post_id: &PostId) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::Star)?;
        let api = Arc::clone(&self.api);
        match api.star_post(&token, post_id).await {
            Ok(_) => {
                self.dispatch(Action::StarToggled(post_id.clone()));
                Ok(())
            }
            Err(err) => {
                warn!(post = %post_id, error = %err, "star post failed");
                Err(UiError::from_client(UiErrorContext::Star, &err))
            }
        }
    }

    /// Shares the current recommendation. No-op without one.
    pub async fn share_recommendation(&mut self) -> Result<(), UiError> {
        let Some(recommendation) = self.state.current_recommendation.clone() else {
            return Ok(());
        };
        let token = self.require_token(UiErrorContext::Share)?;
        let api = Arc::clone(&self.api);
        let request = ShareRecommendationRequest {
            recommendation_id: recommendation.id.clone(),
            mood: self.state.mood_form.mood.as_str().to_string(),
            mood_intensity: self.state.mood_form.intensity,
            description: format!(
                "Shared this {} recommendation: {}",
                recommendation.kind, recommendation.title
            ),
        };

        self.dispatch(Action::LoadingStarted);
        let result = api.share_recommendation(&token, &request).await;
        self.dispatch(Action::LoadingFinished);

        result.map_err(|err| self.report_with_message(UiErrorContext::Share, &err, SHARE_FAILURE))?;
        info!(recommendation = %recommendation.id, "recommendation shared");
        self.dispatch(Action::Notify(Notice::info(SHARE_SUCCESS)));
        Ok(())
    }

    /// Rates the current recommendation and clears it. No-op without one.
    pub async fn submit_feedback(&mut self, liked: bool) -> Result<(), UiError> {
        let Some(recommendation) = self.state.current_recommendation.clone() else {
            return Ok(());
        };
        let token = self.require_token(UiErrorContext::Feedback)?;
        let api = Arc::clone(&self.api);
        let request = RecommendationFeedbackRequest {
            recommendation_id: recommendation.id.clone(),
            liked,
            mood: self.state.mood_form.mood.as_str().to_string(),
        };

        self.dispatch(Action::LoadingStarted);
        let result = api.submit_recommendation_feedback(&token, &request).await;
        self.dispatch(Action::LoadingFinished);

        result.map_err(|err| {
            self.report_with_message(UiErrorContext::Feedback, &err, FEEDBACK_FAILURE)
        })?;
        info!(recommendation = %recommendation.id, liked, "feedback submitted");
        let verdict = if liked { "liked" } else { "disliked" };
        self.dispatch(Action::Notify(Notice::info(format!(
            "Thank you for your feedback! You {verdict} this recommendation."
        ))));
        self.dispatch(Action::RecommendationCleared);
        Ok(())
    }

    /// Switches screens and runs that screen's on-entry load.
    pub async fn open_screen(&mut self, screen: Screen) -> Result<(), UiError> {
        info!(from = %self.state.screen, to = %screen, "switching screen");
        self.dispatch(Action::Navigate(screen));
        match screen {
            Screen::Community => self.fetch_community_posts().await,
            Screen::Main if self.state.session.is_some() => {
                let _ = self.refresh_mood_history().await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Selects a calendar day and loads that day's entries from the server.
    pub async fn open_day(&mut self, date: NaiveDate) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::DayEntries)?;
        self.dispatch(Action::SelectDate(date));
        self.dispatch(Action::Navigate(Screen::DayDetail));
        let api = Arc::clone(&self.api);

        self.dispatch(Action::LoadingStarted);
        let result = api.list_mood_entries(&token, Some(date)).await;
        self.dispatch(Action::LoadingFinished);

        let entries = result.map_err(|err| self.report(UiErrorContext::DayEntries, &err))?;
        self.dispatch(Action::DayEntriesLoaded(entries));
        Ok(())
    }

    pub async fn publish_post(&mut self, draft: CreatePostRequest) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::PublishPost)?;
        let api = Arc::clone(&self.api);

        self.dispatch(Action::LoadingStarted);
        let result = api.create_community_post(&token, &draft).await;
        self.dispatch(Action::LoadingFinished);

        result.map_err(|err| self.report(UiErrorContext::PublishPost, &err))?;
        info!(mood = %draft.mood, "community post published");
        self.dispatch(Action::Notify(Notice::info(POST_PUBLISHED)));
        self.fetch_community_posts().await
    }

    pub async fn load_feedback_history(&mut self) -> Result<(), UiError> {
        let token = self.require_token(UiErrorContext::FeedbackHistory)?;
        let api = Arc::clone(&self.api);

        self.dispatch(Action::LoadingStarted);
        let result = api.feedback_history(&token).await;
        self.dispatch(Action::LoadingFinished);

        let history = result.map_err(|err| self.report(UiErrorContext::FeedbackHistory, &err))?;
        self.dispatch(Action::FeedbackHistoryLoaded(history));
        Ok(())
    }

    /// Drops the session and returns to the auth screen.
    pub fn reset(&mut self) {
        info!("resetting session");
        self.dispatch(Action::Reset);
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
