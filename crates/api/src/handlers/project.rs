//! Handlers for the `/solutions` project pages.
//!
//! Read paths render the not-found page on failure; write paths render the
//! generic error page. Successful writes redirect to the listing.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use catalog_core::error::CoreError;
use catalog_core::project::ProjectInput;
use catalog_core::types::{parse_id, DbId};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

const PROJECT_NOT_FOUND: &str = "Project not found";

/// Query parameters of the listing (`?sector=`).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub sector: Option<String>,
}

/// URL-encoded body of the add and edit forms.
///
/// Every field defaults to empty so a partial submission still reaches
/// validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    /// Only present on the edit form.
    pub id: String,
    pub title: String,
    pub feature_img_url: String,
    pub summary_short: String,
    pub intro_short: String,
    pub impact: String,
    pub original_source_url: String,
    /// Empty means "no sector".
    pub sector_id: String,
}

impl ProjectForm {
    /// Convert the submitted strings into a typed [`ProjectInput`].
    pub fn to_input(&self) -> Result<ProjectInput, CoreError> {
        let sector_id = match self.sector_id.trim() {
            "" => None,
            raw => Some(
                raw.parse::<DbId>()
                    .map_err(|_| CoreError::Validation(format!("Invalid sector id: {raw}")))?,
            ),
        };
        Ok(ProjectInput {
            title: self.title.trim().to_string(),
            feature_img_url: self.feature_img_url.trim().to_string(),
            summary_short: self.summary_short.clone(),
            intro_short: self.intro_short.clone(),
            impact: self.impact.clone(),
            original_source_url: self.original_source_url.trim().to_string(),
            sector_id,
        })
    }
}

fn redirect_to_listing() -> Redirect {
    Redirect::to(views::PROJECTS_PATH)
}

/// GET /solutions/projects[?sector=...]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Html<String>> {
    let sector = params
        .sector
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match sector {
        Some(sector) => {
            let projects = state
                .store
                .get_projects_by_sector(sector)
                .await
                .map_err(AppError::read)?;
            if projects.is_empty() {
                return Err(AppError::NotFound(format!(
                    "No projects found for sector: {sector}"
                )));
            }
            Ok(views::projects(&projects, Some(sector)))
        }
        None => {
            let projects = state
                .store
                .get_all_projects()
                .await
                .map_err(AppError::read)?;
            Ok(views::projects(&projects, None))
        }
    }
}

/// GET /solutions/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::NotFound(PROJECT_NOT_FOUND.into()))?;
    let project = state
        .store
        .get_project_by_id(id)
        .await
        .map_err(AppError::read)?
        .ok_or_else(|| AppError::NotFound(PROJECT_NOT_FOUND.into()))?;
    Ok(views::project(&project))
}

/// GET /solutions/addProject
pub async fn add_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let sectors = state
        .store
        .get_all_sectors()
        .await
        .map_err(AppError::write)?;
    Ok(views::add_project(&sectors))
}

/// POST /solutions/addProject
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Redirect> {
    let input = form.to_input().map_err(AppError::write)?;
    let project = state
        .store
        .add_project(&input)
        .await
        .map_err(AppError::write)?;
    tracing::info!(project_id = project.id, "Project created");
    Ok(redirect_to_listing())
}

/// GET /solutions/editProject/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::NotFound(PROJECT_NOT_FOUND.into()))?;
    let project = state
        .store
        .get_project_by_id(id)
        .await
        .map_err(AppError::read)?
        .ok_or_else(|| AppError::NotFound(PROJECT_NOT_FOUND.into()))?;
    let sectors = state
        .store
        .get_all_sectors()
        .await
        .map_err(AppError::read)?;
    Ok(views::edit_project(&project, &sectors))
}

/// POST /solutions/editProject (id in the body)
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Redirect> {
    let id = parse_id(&form.id).ok_or_else(|| AppError::write_missing_project(&form.id))?;
    let input = form.to_input().map_err(AppError::write)?;
    state
        .store
        .edit_project(id, &input)
        .await
        .map_err(AppError::write)?;
    tracing::info!(project_id = id, "Project updated");
    Ok(redirect_to_listing())
}

/// GET /solutions/deleteProject/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id).ok_or_else(|| AppError::write_missing_project(&raw_id))?;
    state
        .store
        .delete_project(id)
        .await
        .map_err(AppError::write)?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(redirect_to_listing())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form(sector_id: &str) -> ProjectForm {
        ProjectForm {
            title: "  Solar Grid ".into(),
            sector_id: sector_id.into(),
            ..ProjectForm::default()
        }
    }

    #[test]
    fn empty_sector_means_none() {
        let input = form("").to_input().unwrap();
        assert_eq!(input.sector_id, None);
        assert_eq!(input.title, "Solar Grid");
    }

    #[test]
    fn numeric_sector_is_parsed() {
        assert_eq!(form("4").to_input().unwrap().sector_id, Some(4));
    }

    #[test]
    fn non_numeric_sector_is_a_validation_error() {
        assert_matches!(form("energy").to_input(), Err(CoreError::Validation(_)));
    }
}
