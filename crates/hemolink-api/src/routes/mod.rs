//! Router assembly.
//!
//! The auth endpoints stay public so tokens can be obtained; every entity
//! route sits behind the bearer middleware, which passes requests through
//! untouched unless enforcement is enabled.

pub mod auth;
pub mod blood_requests;
pub mod donations;
pub mod donor_pledges;
pub mod donor_profiles;
pub mod users;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hemolink_auth::BearerAuthLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let open = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let guarded = Router::new()
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/{user_id}", delete(users::remove))
        .route(
            "/api/donor_profiles",
            get(donor_profiles::list).post(donor_profiles::create),
        )
        .route(
            "/api/donor_profiles/{id}",
            get(donor_profiles::get_one).delete(donor_profiles::remove),
        )
        .route(
            "/api/blood_requests",
            get(blood_requests::list).post(blood_requests::create),
        )
        .route("/api/blood_requests/{id}", delete(blood_requests::remove))
        .route(
            "/api/donor_pledges",
            get(donor_pledges::list).post(donor_pledges::create),
        )
        .route("/api/donor_pledges/{id}", get(donor_pledges::get_one))
        .route(
            "/api/donor_pledges/by_request/{request_id}",
            get(donor_pledges::by_request),
        )
        .route("/api/donations", get(donations::list).post(donations::create))
        .route("/api/donations/{id}", delete(donations::remove))
        .layer(BearerAuthLayer::new(state.auth.clone()));

    // Any-origin CORS; browser dashboards hit this API directly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    open.merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
