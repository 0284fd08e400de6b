/// HTTP handlers for pixshare-service
///
/// This module contains handlers for:
/// - Posts: publish the composed post, read the grid feed and post detail
/// - Profiles: read the caller's public profile
/// - Settings: read and update the theme preference
pub mod posts;
pub mod profiles;
pub mod settings;

pub use posts::{create_post, get_post, get_user_posts, list_posts};
pub use profiles::get_my_profile;
pub use settings::{get_theme, update_theme};
