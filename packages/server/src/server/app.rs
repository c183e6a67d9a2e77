//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    create_artist, create_show, create_venue, delete_artist, delete_venue, get_artist, get_venue,
    health_handler, list_artists, list_shows, list_venues, search_artists, search_venues,
    update_artist, update_venue,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/venues", get(list_venues).post(create_venue))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/:id",
            get(get_venue).put(update_venue).delete(delete_venue),
        )
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/:id",
            get(get_artist).put(update_artist).delete(delete_artist),
        )
        .route("/shows", get(list_shows).post(create_show))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
