/// Settings handlers - theme preference for the settings page
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::profile_repo;
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::models::{is_valid_theme, ThemeSettings, ALLOWED_THEMES};

/// Get the caller's stored theme preference
/// GET /api/v1/account/settings/theme
pub async fn get_theme(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let theme = profile_repo::get_theme(pool.get_ref(), user_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ThemeSettings { theme }))
}

/// Update the caller's theme preference
/// PUT /api/v1/account/settings/theme
pub async fn update_theme(
    pool: web::Data<PgPool>,
    user_id: UserId,
    payload: web::Json<ThemeSettings>,
) -> Result<HttpResponse> {
    let theme = payload.theme.as_str();
    if !is_valid_theme(theme) {
        return Err(AppError::ValidationError(format!(
            "Theme must be one of: {}",
            ALLOWED_THEMES.join(", ")
        )));
    }

    let updated = profile_repo::update_theme(pool.get_ref(), user_id.0, theme).await?;
    if !updated {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(ThemeSettings {
        theme: theme.to_string(),
    }))
}
