//! Data Transfer Objects - request/response types for the API.
//!
//! Enum-valued fields (categories, games, statuses) travel as strings and are
//! validated server-side, keeping this crate free of domain dependencies.

use serde::{Deserialize, Serialize};

/// Request to login to the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Public identity of the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Request to create a news article. Optional fields fall back to defaults:
/// slug is derived from the title, date defaults to today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author: Option<String>,
}

/// Partial update of a news article; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<String>,
}

/// Request to create a blog post. Read time is derived from the content
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update of a blog post; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub tags: Option<Vec<String>>,
}

/// Request to import blog posts from source-file URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBlogsRequest {
    pub urls: Vec<String>,
}

/// One failed import within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFailure {
    pub url: String,
    pub error: String,
}

/// Outcome of a batch import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport<T> {
    pub imported: usize,
    pub failed: usize,
    pub posts: Vec<T>,
    pub errors: Vec<ImportFailure>,
}

/// Response for a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// One side of a match as carried over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeamDto {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub score: Option<i32>,
}

/// Request to create a match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub game: String,
    pub tournament: String,
    pub date: String,
    pub time: String,
    pub team_a: MatchTeamDto,
    pub team_b: MatchTeamDto,
    pub status: String,
    #[serde(default)]
    pub result: Option<String>,
}

/// Partial update of a match. An explicit empty-string `result` clears the
/// stored result; an absent field leaves it unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMatchRequest {
    pub game: Option<String>,
    pub tournament: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub team_a: Option<MatchTeamDto>,
    pub team_b: Option<MatchTeamDto>,
    pub status: Option<String>,
    pub result: Option<String>,
}
