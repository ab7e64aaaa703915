use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>, origins: &[String]) -> Router<S> {
    let origins = origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin.trim())
                .inspect_err(|_| warn!(%origin, "ignoring invalid cors origin"))
                .ok()
        })
        .collect::<Vec<_>>();

    router.layer(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
