#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_core::error::CoreError;
use catalog_core::project::ProjectInput;
use catalog_core::types::DbId;
use catalog_db::models::project::{Project, ProjectWithSector};
use catalog_db::models::sector::Sector;
use catalog_db::store::CatalogStore;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Inner {
    sectors: Vec<Sector>,
    projects: BTreeMap<DbId, Project>,
    next_id: DbId,
    failure: Option<String>,
}

/// [`CatalogStore`] double holding everything in a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn with_sectors(names: &[&str]) -> Self {
        let sectors = names
            .iter()
            .zip(1..)
            .map(|(name, id)| Sector {
                id,
                sector_name: (*name).to_string(),
            })
            .collect();
        Self {
            inner: Mutex::new(Inner {
                sectors,
                next_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Make every subsequent call fail with a query error.
    pub fn fail_with(&self, message: &str) {
        self.inner.lock().unwrap().failure = Some(message.to_string());
    }

    pub fn project(&self, id: DbId) -> Option<Project> {
        self.inner.lock().unwrap().projects.get(&id).cloned()
    }

    pub fn project_count(&self) -> usize {
        self.inner.lock().unwrap().projects.len()
    }

    fn attach(inner: &Inner, project: &Project) -> ProjectWithSector {
        let sector = project
            .sector_id
            .and_then(|id| inner.sectors.iter().find(|s| s.id == id).cloned());
        ProjectWithSector {
            project: project.clone(),
            sector,
        }
    }

    fn check(inner: &Inner, input: &ProjectInput) -> Result<(), CoreError> {
        if let Some(message) = &inner.failure {
            return Err(CoreError::Query(message.clone()));
        }
        input.check()?;
        if let Some(sector_id) = input.sector_id {
            if !inner.sectors.iter().any(|s| s.id == sector_id) {
                return Err(CoreError::Validation(
                    "insert or update on table \"Projects\" violates foreign key constraint"
                        .into(),
                ));
            }
        }
        Ok(())
    }

    fn fail_if_set(inner: &Inner) -> Result<(), CoreError> {
        match &inner.failure {
            Some(message) => Err(CoreError::Query(message.clone())),
            None => Ok(()),
        }
    }
}

fn to_project(id: DbId, input: &ProjectInput) -> Project {
    Project {
        id,
        title: input.title.clone(),
        feature_img_url: input.feature_img_url.clone(),
        summary_short: input.summary_short.clone(),
        intro_short: input.intro_short.clone(),
        impact: input.impact.clone(),
        original_source_url: input.original_source_url.clone(),
        sector_id: input.sector_id,
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn add_project(&self, input: &ProjectInput) -> Result<Project, CoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&inner, input)?;
        let id = inner.next_id;
        inner.next_id += 1;
        let project = to_project(id, input);
        inner.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn get_all_sectors(&self) -> Result<Vec<Sector>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        Ok(inner.sectors.clone())
    }

    async fn get_all_projects(&self) -> Result<Vec<ProjectWithSector>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        Ok(inner
            .projects
            .values()
            .map(|p| Self::attach(&inner, p))
            .collect())
    }

    async fn get_project_by_id(&self, id: DbId) -> Result<Option<ProjectWithSector>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        Ok(inner.projects.get(&id).map(|p| Self::attach(&inner, p)))
    }

    async fn get_projects_by_sector(
        &self,
        fragment: &str,
    ) -> Result<Vec<ProjectWithSector>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        let needle = fragment.to_lowercase();
        Ok(inner
            .projects
            .values()
            .map(|p| Self::attach(&inner, p))
            .filter(|p| {
                p.sector
                    .as_ref()
                    .is_some_and(|s| s.sector_name.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn edit_project(&self, id: DbId, input: &ProjectInput) -> Result<Project, CoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        if !inner.projects.contains_key(&id) {
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            });
        }
        Self::check(&inner, input)?;
        let project = to_project(id, input);
        inner.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn delete_project(&self, id: DbId) -> Result<(), CoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::fail_if_set(&inner)?;
        match inner.projects.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Project",
                id,
            }),
        }
    }

    async fn is_healthy(&self) -> bool {
        self.inner.lock().unwrap().failure.is_none()
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack the binary uses.
pub fn build_test_app(store: Arc<InMemoryStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}
