pub mod analytics;
pub mod certifications;
pub mod swipe;
pub mod terms;
pub mod users;

use axum::Router;

pub fn api_router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/certifications", certifications::router())
        .nest("/analytics", analytics::router())
        .merge(swipe::router())
        .merge(terms::router())
}
