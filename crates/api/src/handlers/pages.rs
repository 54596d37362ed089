//! Handlers for the static pages and the catch-all.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::views;

/// GET /
pub async fn home() -> Html<String> {
    views::home()
}

/// GET /about
pub async fn about() -> Html<String> {
    views::about()
}

/// Any route nothing else matched.
pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::not_found("I'm sorry, we're unable to find what you're looking for"),
    )
}
