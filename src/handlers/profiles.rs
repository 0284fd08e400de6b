/// Profile handlers - read-only access to the caller's public profile
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::profile_repo;
use crate::error::{AppError, Result};
use crate::middleware::UserId;

/// Get the authenticated caller's profile
/// GET /api/v1/profiles/me
pub async fn get_my_profile(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let profile = profile_repo::find_by_user_id(pool.get_ref(), user_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(profile))
}
