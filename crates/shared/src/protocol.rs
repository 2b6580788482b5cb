use serde::{Deserialize, Serialize};

use crate::domain::{CommunityPost, Intensity, MoodEntryId, Recommendation, RecommendationId, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub nationality: String,
    pub gender: String,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMoodRequest {
    pub mood: String,
    pub intensity: Intensity,
    pub note: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMoodResponse {
    pub mood_id: MoodEntryId,
}

/// Mood fields plus a millisecond nonce so the backend never serves a cached
/// recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
    pub intensity: Intensity,
    pub note: String,
    pub description: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecommendationRequest {
    pub recommendation_id: RecommendationId,
    pub mood: String,
    pub mood_intensity: Intensity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFeedbackRequest {
    pub recommendation_id: RecommendationId,
    pub liked: bool,
    pub mood: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub mood: String,
    pub mood_intensity: Intensity,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPostsResponse {
    #[serde(default)]
    pub posts: Vec<CommunityPost>,
}
