/// Post handlers - HTTP endpoints for the compose flow and the grid feed
use actix_multipart::form::{bytes::Bytes as MultipartBytes, text::Text, MultipartForm};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::{ImageHostClient, PostService};

/// The compose form: a title and exactly one image. Both fields are
/// optional at the multipart layer so the service can answer with the
/// specific validation message instead of a generic extractor error.
#[derive(Debug, MultipartForm)]
#[multipart(duplicate_field = "deny")]
pub struct ComposePostForm {
    pub title: Option<Text<String>>,
    pub media: Option<MultipartBytes>,
}

/// Publish a new post
/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    image_host: web::Data<ImageHostClient>,
    config: web::Data<Config>,
    user_id: UserId,
    form: MultipartForm<ComposePostForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let title = form.title.map(|field| field.0).unwrap_or_default();
    let media = form.media.as_ref().map(|field| field.data.as_ref());

    let service = PostService::new(
        pool.get_ref().clone(),
        image_host.get_ref().clone(),
        config.image_host.max_image_bytes,
    );
    let post = service.publish_post(user_id.0, title.trim(), media).await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
/// GET /api/v1/posts/{post_id}
pub async fn get_post(
    pool: web::Data<PgPool>,
    image_host: web::Data<ImageHostClient>,
    config: web::Data<Config>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(
        pool.get_ref().clone(),
        image_host.get_ref().clone(),
        config.image_host.max_image_bytes,
    );
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// One page of the grid feed
/// GET /api/v1/posts
pub async fn list_posts(
    pool: web::Data<PgPool>,
    image_host: web::Data<ImageHostClient>,
    config: web::Data<Config>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = PostService::new(
        pool.get_ref().clone(),
        image_host.get_ref().clone(),
        config.image_host.max_image_bytes,
    );
    let page = service
        .list_posts(query.clamped_limit(), query.clamped_offset())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// One page of a user's posts
/// GET /api/v1/posts/user/{user_id}
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    image_host: web::Data<ImageHostClient>,
    config: web::Data<Config>,
    user_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = PostService::new(
        pool.get_ref().clone(),
        image_host.get_ref().clone(),
        config.image_host.max_image_bytes,
    );
    let page = service
        .list_user_posts(*user_id, query.clamped_limit(), query.clamped_offset())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Pagination query parameters. The grid fetches a fixed-size page and
/// advances the offset when the caller asks for more.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

const MAX_PAGE_SIZE: i64 = 100;

fn default_limit() -> i64 {
    24
}

impl PaginationParams {
    pub fn clamped_limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn clamped_offset(&self) -> i64 {
        self.offset.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_to_page_bounds() {
        let params = PaginationParams {
            limit: 0,
            offset: 0,
        };
        assert_eq!(params.clamped_limit(), 1);

        let params = PaginationParams {
            limit: 10_000,
            offset: 0,
        };
        assert_eq!(params.clamped_limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn negative_offset_is_clamped_to_zero() {
        let params = PaginationParams {
            limit: 24,
            offset: -1,
        };
        assert_eq!(params.clamped_offset(), 0);

        let params = PaginationParams {
            limit: 24,
            offset: 42,
        };
        assert_eq!(params.clamped_offset(), 42);
    }

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 24);
        assert_eq!(params.offset, 0);
    }
}
