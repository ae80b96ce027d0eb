pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};

use crate::store::ActivityDirectory;

/// API routes only; `main` nests the static file service on top of this so
/// tests can drive the JSON surface without touching the filesystem.
pub fn router(directory: ActivityDirectory) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        .with_state(directory)
}
