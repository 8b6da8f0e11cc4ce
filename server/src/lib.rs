//! # Trivia Server
//!
//! JSON API behind the trivia game frontend.
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | GET | `/categories` | id to label map of every category |
//! | GET | `/questions?page=N` | one page of questions plus categories |
//! | GET | `/categories/{id}/questions` | every question in a category |
//! | POST | `/questions` | create a question |
//! | DELETE | `/questions/{id}` | delete a question |
//! | POST | `/search` | case-insensitive substring search |
//! | POST | `/quizzes` | next unseen quiz question |
//!
//! Errors come back as `{ "success": false, "message": ... }`.
//!
//!
//!
//! # Quizzes
//!
//! The client keeps the quiz history. Each request carries
//! `previous_questions` (ids already shown) and `quiz_category`
//! (`{ "type": "click", "id": 0 }` for every category). The response holds
//! one unseen question, or `"question": null` when the category is used up.
//!
//!
//!
//! # Setup
//!
//! Load the sample bank.
//! ```sh
//! cargo run -p seed -- trivia.db data/trivia.json
//! ```
//!
//! Start the server.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Log every quiz pick.
//! ```sh
//! RUST_LOG=info cargo run --features verbose
//! ```
//!
//! ## Environment
//!
//! - `TRIVIA_PORT`: listen port, default 5000
//! - `TRIVIA_DATABASE`: SQLite file, default `trivia.db`
//! - `QUESTIONS_PER_PAGE`: page size of `/questions`, default 10
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod payloads;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use error::StartupError;
use routes::{
    categories_handler, category_questions_handler, create_question_handler,
    delete_question_handler, method_not_allowed_handler, not_found_handler, questions_handler,
    quizzes_handler, search_handler,
};
use state::AppState;

pub async fn start_server() -> Result<(), StartupError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/categories", get(categories_handler))
        .route("/categories/{id}/questions", get(category_questions_handler))
        .route(
            "/questions",
            get(questions_handler).post(create_question_handler),
        )
        .route("/questions/{id}", delete(delete_question_handler))
        .route("/search", post(search_handler))
        .route("/quizzes", post(quizzes_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
