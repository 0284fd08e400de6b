//! Prometheus metrics for pixshare-service.
//!
//! Exposes publish-flow collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

/// Posts successfully published (upload + insert both succeeded).
pub static POSTS_PUBLISHED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "pixshare_posts_published_total",
        "Number of posts successfully published"
    )
    .expect("register pixshare_posts_published_total")
});

/// Publish attempts that failed, labeled by the step that failed.
pub static PUBLISH_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "pixshare_publish_failures_total",
        "Number of failed publish attempts by failing step",
        &["step"]
    )
    .expect("register pixshare_publish_failures_total")
});

/// Time spent waiting on the external image host per upload call.
pub static UPLOAD_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "pixshare_upload_duration_seconds",
        "Latency of image host upload calls"
    )
    .expect("register pixshare_upload_duration_seconds")
});

/// Uploaded assets left orphaned because the post insert failed afterwards.
pub static ORPHANED_ASSETS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "pixshare_orphaned_assets_total",
        "Uploaded assets whose post insert failed"
    )
    .expect("register pixshare_orphaned_assets_total")
});

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collectors_register_once() {
        POSTS_PUBLISHED.inc();
        PUBLISH_FAILURES.with_label_values(&["upload"]).inc();
        ORPHANED_ASSETS.inc();
        assert!(POSTS_PUBLISHED.get() >= 1);
        assert!(PUBLISH_FAILURES.with_label_values(&["upload"]).get() >= 1);
    }
}
