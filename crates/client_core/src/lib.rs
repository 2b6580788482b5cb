use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::{CommunityPost, MoodEntry, PostId, Recommendation},
    error::ErrorBody,
    protocol::{
        AuthResponse, CommunityPostsResponse, CreatePostRequest, LogMoodRequest, LogMoodResponse,
        LoginRequest, RecommendationFeedbackRequest, RecommendationRequest,
        RecommendationResponse, RegisterRequest, ShareRecommendationRequest,
    },
};
use tracing::{debug, warn};
use url::Url;

pub mod error;
pub use error::{ClientError, Endpoint};

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Every remote call the journal UI makes. Token-bearing methods take the
/// session token explicitly; the client itself holds no session.
#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;
    async fn log_mood(&self, token: &str, request: &LogMoodRequest) -> Result<LogMoodResponse>;
    async fn list_mood_entries(
        &self,
        token: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<MoodEntry>>;
    async fn create_community_post(&self, token: &str, request: &CreatePostRequest)
        -> Result<Value>;
    async fn list_community_posts(&self, token: &str) -> Result<Vec<CommunityPost>>;
    async fn like_post(&self, token: &str, post_id: &PostId) -> Result<Value>;
    async fn star_post(&self, token: &str, post_id: &PostId) -> Result<Value>;
    async fn share_recommendation(
        &self,
        token: &str,
        request: &ShareRecommendationRequest,
    ) -> Result<Value>;
    async fn get_recommendation(
        &self,
        token: &str,
        request: &RecommendationRequest,
    ) -> Result<Recommendation>;
    async fn submit_recommendation_feedback(
        &self,
        token: &str,
        request: &RecommendationFeedbackRequest,
    ) -> Result<Value>;
    async fn feedback_history(&self, token: &str) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct HttpJournalClient {
    http: Client,
    base_url: String,
}

impl HttpJournalClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Post ids are server-issued strings, so they are percent-encoded as a
    /// single path segment.
    fn post_action_url(&self, post_id: &PostId, action: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        url.path_segments_mut()
            .map_err(|()| ClientError::UnsupportedScheme(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v1", "community", "posts", post_id.as_str(), action]);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        debug!(
            endpoint = endpoint.name(),
            authenticated = endpoint.requires_token(),
            "dispatching api request"
        );
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = body.message_or(endpoint.fallback_message());
            warn!(
                endpoint = endpoint.name(),
                status = status.as_u16(),
                %message,
                "api request rejected"
            );
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })
    }
}

/// One malformed entry must not hide the rest of the history, so entries that
/// fail to decode are logged and skipped.
fn decode_entries(raw: Vec<Value>) -> Vec<MoodEntry> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<MoodEntry>(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable mood entry");
                None
            }
        })
        .collect()
}

/// Validates the base URL and strips trailing slashes so endpoint paths can be
/// appended verbatim.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl JournalApi for HttpJournalClient {
    async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse> {
        let request = self.http.post(self.url("/auth/login")).json(&LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        });
        self.execute(Endpoint::Login, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let request = self.http.post(self.url("/auth/register")).json(request);
        self.execute(Endpoint::Register, request).await
    }

    async fn log_mood(&self, token: &str, request: &LogMoodRequest) -> Result<LogMoodResponse> {
        let request = self
            .http
            .post(self.url("/api/v1/mood/mood"))
            .bearer_auth(token)
            .json(request);
        self.execute(Endpoint::LogMood, request).await
    }

    async fn list_mood_entries(
        &self,
        token: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<MoodEntry>> {
        let mut request = self
            .http
            .get(self.url("/api/v1/mood/mood"))
            .bearer_auth(token);
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        let raw: Vec<Value> = self.execute(Endpoint::ListMoodEntries, request).await?;
        Ok(decode_entries(raw))
    }

    async fn create_community_post(
        &self,
        token: &str,
        request: &CreatePostRequest,
    ) -> Result<Value> {
        let request = self
            .http
            .post(self.url("/api/v1/community/posts"))
            .bearer_auth(token)
            .json(request);
        self.execute(Endpoint::CreatePost, request).await
    }

    async fn list_community_posts(&self, token: &str) -> Result<Vec<CommunityPost>> {
        let request = self
            .http
            .get(self.url("/api/v1/community/posts"))
            .bearer_auth(token);
        let body: CommunityPostsResponse = self.execute(Endpoint::ListPosts, request).await?;
        Ok(body.posts)
    }

    async fn like_post(&self, token: &str, post_id: &PostId) -> Result<Value> {
        let request = self
            .http
            .post(self.post_action_url(post_id, "like")?)
            .bearer_auth(token);
        self.execute(Endpoint::LikePost, request).await
    }

    async fn star_post(&self, token: &str, post_id: &PostId) -> Result<Value> {
        let request = self
            .http
            .post(self.post_action_url(post_id, "star")?)
            .bearer_auth(token);
        self.execute(Endpoint::StarPost, request).await
    }

    async fn share_recommendation(
        &self,
        token: &str,
        request: &ShareRecommendationRequest,
    ) -> Result<Value> {
        let request = self
            .http
            .post(self.url("/api/v1/mood/share"))
            .bearer_auth(token)
            .json(request);
        self.execute(Endpoint::ShareRecommendation, request).await
    }

    async fn get_recommendation(
        &self,
        token: &str,
        request: &RecommendationRequest,
    ) -> Result<Recommendation> {
        let request = self
            .http
            .post(self.url("/api/v1/mood/recommend"))
            .bearer_auth(token)
            .json(request);
        let body: RecommendationResponse =
            self.execute(Endpoint::GetRecommendation, request).await?;
        Ok(body.recommendation)
    }

    async fn submit_recommendation_feedback(
        &self,
        token: &str,
        request: &RecommendationFeedbackRequest,
    ) -> Result<Value> {
        let request = self
            .http
            .post(self.url("/api/v1/mood/recommendation/feedback"))
            .bearer_auth(token)
            .json(request);
        self.execute(Endpoint::SubmitFeedback, request).await
    }

    async fn feedback_history(&self, token: &str) -> Result<Value> {
        let request = self
            .http
            .get(self.url("/api/v1/mood/recommendation/feedback/history"))
            .bearer_auth(token);
        self.execute(Endpoint::FeedbackHistory, request).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
