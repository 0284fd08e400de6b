/// Pixshare Service Library
///
/// Backend for the Pixshare image-sharing app: users publish a titled image,
/// browse a paginated grid feed, and manage their profile theme preference.
/// Image bytes are handed off to an external image host; this service owns
/// the posts and profiles tables and the publish orchestration.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for posts, profiles, and settings
/// - `models`: Data structures for posts and user profiles
/// - `services`: Business logic layer (publish flow, image host client)
/// - `db`: Database access layer and repositories
/// - `middleware`: Request identity extraction
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
