/// HTTP middleware utilities for pixshare-service
///
/// Identity arrives pre-validated from the gateway as an `x-user-id` header;
/// this module provides the extractor that hands it to handlers.
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted user identifier for the authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

impl FromRequest for UserId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(UserId);

        ready(user_id.ok_or_else(|| {
            AppError::Unauthorized(format!("missing or invalid {} header", USER_ID_HEADER)).into()
        }))
    }
}
