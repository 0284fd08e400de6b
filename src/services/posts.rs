/// Post service - owns the publish flow and the grid feed reads.
///
/// Publishing is a single-shot, non-idempotent sequence: validate locally,
/// resolve the caller's profile, encode the image, upload it to the image
/// host, then insert the post row. A failure at any step aborts the rest;
/// nothing is retried. An asset uploaded before a failed insert is left
/// orphaned on the host (logged and counted, not compensated).
use crate::db::{post_repo, profile_repo};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{Post, PostsPage};
use crate::services::ImageHostClient;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::ImageFormat;
use sqlx::PgPool;
use uuid::Uuid;

/// Longest accepted post title, in characters.
pub const MAX_TITLE_LEN: usize = 50;

pub struct PostService {
    pool: PgPool,
    image_host: ImageHostClient,
    max_image_bytes: usize,
}

/// Reject bad titles before any I/O happens.
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(AppError::ValidationError("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::ValidationError(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}

/// Reject missing or unrecognizable images before any I/O happens.
/// Returns the sniffed format on success.
pub fn validate_image(image: Option<&[u8]>, max_bytes: usize) -> Result<ImageFormat> {
    let bytes = match image {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(AppError::ValidationError("Image is required".to_string())),
    };

    if bytes.len() > max_bytes {
        return Err(AppError::ValidationError(format!(
            "Image exceeds the {} byte limit",
            max_bytes
        )));
    }

    image::guess_format(bytes)
        .map_err(|_| AppError::ValidationError("File is not a recognized image".to_string()))
}

/// Encode image bytes into the transportable form the image host accepts.
pub fn encode_image(bytes: &[u8], format: ImageFormat) -> String {
    format!("data:{};base64,{}", mime_for(format), BASE64.encode(bytes))
}

/// Whether a page starting past `offset + limit` would still find rows.
/// Saturating so an absurd offset cannot overflow.
fn page_has_more(offset: i64, limit: i64, total_count: i64) -> bool {
    offset.saturating_add(limit) < total_count
}

fn mime_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Avif => "image/avif",
        _ => "application/octet-stream",
    }
}

impl PostService {
    pub fn new(pool: PgPool, image_host: ImageHostClient, max_image_bytes: usize) -> Self {
        Self {
            pool,
            image_host,
            max_image_bytes,
        }
    }

    /// Run the full publish sequence for one composed post.
    pub async fn publish_post(
        &self,
        user_id: Uuid,
        title: &str,
        image: Option<&[u8]>,
    ) -> Result<Post> {
        validate_title(title).map_err(|err| {
            metrics::PUBLISH_FAILURES.with_label_values(&["validation"]).inc();
            err
        })?;
        let format = validate_image(image, self.max_image_bytes).map_err(|err| {
            metrics::PUBLISH_FAILURES.with_label_values(&["validation"]).inc();
            err
        })?;
        let bytes = image.unwrap_or_default();

        let profile = profile_repo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| {
                metrics::PUBLISH_FAILURES.with_label_values(&["profile"]).inc();
                AppError::NotFound("Profile not found".to_string())
            })?;

        let encoded = encode_image(bytes, format);

        let asset_url = match self.image_host.upload_image(&encoded).await {
            Ok(url) => url,
            Err(err) => {
                metrics::PUBLISH_FAILURES.with_label_values(&["upload"]).inc();
                tracing::error!(%user_id, "image upload failed: {}", err);
                return Err(err);
            }
        };

        let post = match post_repo::create_post(&self.pool, title, &asset_url, profile.id, user_id)
            .await
        {
            Ok(post) => post,
            Err(err) => {
                // The asset stays on the host with no row pointing at it.
                metrics::PUBLISH_FAILURES.with_label_values(&["insert"]).inc();
                metrics::ORPHANED_ASSETS.inc();
                tracing::warn!(
                    %user_id,
                    %asset_url,
                    "post insert failed after successful upload; asset orphaned"
                );
                return Err(err.into());
            }
        };

        metrics::POSTS_PUBLISHED.inc();
        tracing::info!(post_id = %post.id, %user_id, "post published");

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        Ok(post_repo::find_post_by_id(&self.pool, post_id).await?)
    }

    /// One page of the grid feed, newest first.
    pub async fn list_posts(&self, limit: i64, offset: i64) -> Result<PostsPage> {
        let posts = post_repo::list_posts(&self.pool, limit, offset).await?;
        let total_count = post_repo::count_posts(&self.pool).await?;

        Ok(PostsPage {
            posts,
            has_more: page_has_more(offset, limit, total_count),
            total_count,
        })
    }

    /// One page of a user's posts, newest first.
    pub async fn list_user_posts(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<PostsPage> {
        let posts = post_repo::find_posts_by_user(&self.pool, user_id, limit, offset).await?;
        let total_count = post_repo::count_posts_by_user(&self.pool, user_id).await?;

        Ok(PostsPage {
            posts,
            has_more: page_has_more(offset, limit, total_count),
            total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn empty_title_is_rejected() {
        let err = validate_title("").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let err = validate_title(&title).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let title = "x".repeat(MAX_TITLE_LEN);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        // 50 two-byte characters are within the limit
        let title = "ä".repeat(MAX_TITLE_LEN);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn missing_image_is_rejected() {
        let err = validate_image(None, 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn empty_image_is_rejected() {
        let err = validate_image(Some(&[]), 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let bytes = vec![0u8; 32];
        let err = validate_image(Some(&bytes), 16).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let err = validate_image(Some(b"definitely not an image"), 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn png_magic_is_recognized() {
        let format = validate_image(Some(PNG_MAGIC), 1024).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn has_more_tracks_remaining_rows() {
        assert!(page_has_more(0, 24, 25));
        assert!(!page_has_more(0, 24, 24));
        assert!(!page_has_more(24, 24, 25));
    }

    #[test]
    fn has_more_saturates_on_huge_offsets() {
        assert!(!page_has_more(i64::MAX, 24, 100));
        assert!(!page_has_more(i64::MAX - 1, i64::MAX, i64::MAX));
    }

    #[test]
    fn encoded_image_is_a_data_uri() {
        let encoded = encode_image(PNG_MAGIC, ImageFormat::Png);
        assert!(encoded.starts_with("data:image/png;base64,"));

        let payload = encoded.trim_start_matches("data:image/png;base64,");
        assert_eq!(BASE64.decode(payload).unwrap(), PNG_MAGIC);
    }
}
