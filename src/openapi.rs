/// OpenAPI documentation for Pixshare Service
use crate::models::{Post, PostsPage, ThemeSettings, UserProfile};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixshare Service API",
        version = "1.0.0",
        description = "Backend for the Pixshare image-sharing app. Publishes titled image posts through an external image host, serves the paginated grid feed, and stores per-profile theme preferences.",
        contact(
            name = "Pixshare Team",
            email = "team@pixshare.dev"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
        (url = "https://api.pixshare.dev", description = "Production server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post publishing, grid feed, and post detail"),
        (name = "profiles", description = "Read-only public profile access"),
        (name = "settings", description = "Theme preference for the settings page"),
    ),
    components(schemas(Post, UserProfile, PostsPage, ThemeSettings)),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Pixshare Service"
    }

    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
