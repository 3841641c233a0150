//! API handlers for In-N-Out-Books REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod landing;
pub mod openapi;
pub mod users;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections render as [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Authentication
        .route("/login", post(auth::login))
        .route(
            "/users/:email/verify-security-question",
            post(users::verify_security_question),
        )
        .with_state(state);

    Router::new()
        .route("/", get(landing::landing_page))
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .fallback(landing::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
