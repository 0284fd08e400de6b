//! Integration tests for the compose form boundary.
//!
//! Exercises multipart extraction plus the local validation that must reject
//! a bad submission before any network or database call. The probe route
//! runs exactly the validation the publish flow runs first, so a 400 here
//! means the real handler would never have reached the image host.

use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use pixshare_service::handlers::posts::ComposePostForm;
use pixshare_service::services::posts::{validate_image, validate_title, MAX_TITLE_LEN};

const BOUNDARY: &str = "pixshare-test-boundary";
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const MAX_IMAGE_BYTES: usize = 1024 * 1024;

async fn compose_probe(
    form: MultipartForm<ComposePostForm>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();
    let title = form.title.map(|field| field.0).unwrap_or_default();
    validate_title(title.trim())?;

    let media = form.media.as_ref().map(|field| field.data.as_ref());
    validate_image(media, MAX_IMAGE_BYTES)?;

    Ok(HttpResponse::Ok().finish())
}

fn multipart_body(title: Option<&str>, media: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(title) = title {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some(media) = media {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"media\"; filename=\"drawing.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(media);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn submit(title: Option<&str>, media: Option<&[u8]>) -> StatusCode {
    let app = test::init_service(
        App::new().route("/compose", web::post().to(compose_probe)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/compose")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(title, media))
        .to_request();

    test::call_service(&app, req).await.status()
}

#[actix_rt::test]
async fn valid_submission_passes_validation() {
    assert_eq!(
        submit(Some("My latest drawing"), Some(PNG_MAGIC)).await,
        StatusCode::OK
    );
}

#[actix_rt::test]
async fn empty_title_is_rejected() {
    assert_eq!(
        submit(Some(""), Some(PNG_MAGIC)).await,
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn missing_title_field_is_rejected() {
    assert_eq!(submit(None, Some(PNG_MAGIC)).await, StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn whitespace_title_is_rejected() {
    assert_eq!(
        submit(Some("   "), Some(PNG_MAGIC)).await,
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn overlong_title_is_rejected() {
    let title = "x".repeat(MAX_TITLE_LEN + 1);
    assert_eq!(
        submit(Some(&title), Some(PNG_MAGIC)).await,
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn missing_image_is_rejected() {
    assert_eq!(
        submit(Some("My latest drawing"), None).await,
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn non_image_payload_is_rejected() {
    assert_eq!(
        submit(Some("My latest drawing"), Some(b"plain text bytes")).await,
        StatusCode::BAD_REQUEST
    );
}
