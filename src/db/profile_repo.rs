use crate::models::UserProfile;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Find a profile by the owning user's authentication identity
pub async fn find_by_user_id(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, user_id, name, username, avatar_url, theme
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Read the stored theme preference for a user
pub async fn get_theme(pool: &PgPool, user_id: Uuid) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("SELECT theme FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get::<String, _>("theme")))
}

/// Persist a theme preference. Returns false when no profile row exists.
pub async fn update_theme(
    pool: &PgPool,
    user_id: Uuid,
    theme: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE profiles SET theme = $1 WHERE user_id = $2")
        .bind(theme)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
