/// Business logic layer for pixshare-service
pub mod image_host;
pub mod posts;

pub use image_host::ImageHostClient;
pub use posts::PostService;
