/// Database access layer for pixshare-service
///
/// Repositories are free functions over a `PgPool`, one module per table.
pub mod post_repo;
pub mod profile_repo;
