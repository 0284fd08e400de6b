/// Data models for pixshare-service
///
/// This module defines structures for:
/// - Post: a user-submitted title + image record
/// - UserProfile: a user's public identity record, distinct from the
///   authentication identity
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A published post. `asset_url` is the durable address the image host
/// returned for the uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub asset_url: String,
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Public identity record. Read-only from the posts flow; only the theme
/// preference is mutable through this service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: String,
}

/// One page of the grid feed. `has_more` tells the client whether another
/// fetch with an advanced offset will yield more tiles.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub total_count: i64,
    pub has_more: bool,
}

/// Theme preference payload for the settings page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemeSettings {
    pub theme: String,
}

/// Themes the settings page offers.
pub const ALLOWED_THEMES: [&str; 3] = ["light", "dark", "system"];

pub fn is_valid_theme(theme: &str) -> bool {
    ALLOWED_THEMES.contains(&theme)
}
