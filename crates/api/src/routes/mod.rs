pub mod health;
pub mod solutions;

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// GET  /                                   home
/// GET  /about                              about
/// /solutions/...                           see solutions::router
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .nest("/solutions", solutions::router())
}
