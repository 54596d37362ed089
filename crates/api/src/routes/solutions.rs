//! Route definitions for the `/solutions` project pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/solutions`.
///
/// ```text
/// GET  /projects                 -> list (optional ?sector=)
/// GET  /projects/{id}            -> get_by_id
/// GET  /addProject               -> add_form
/// POST /addProject               -> create
/// GET  /editProject/{id}         -> edit_form
/// POST /editProject              -> update (id in body)
/// GET  /deleteProject/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/projects/{id}", get(project::get_by_id))
        .route("/addProject", get(project::add_form).post(project::create))
        .route("/editProject", axum::routing::post(project::update))
        .route("/editProject/{id}", get(project::edit_form))
        .route("/deleteProject/{id}", get(project::delete))
}
