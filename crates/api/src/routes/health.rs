//! Liveness check for the catalog. Always answers 200; the body says whether
//! the project store is reachable.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    Ok,
    /// Pages still render, but every store-backed route will fail.
    Degraded,
}

impl From<bool> for CatalogStatus {
    fn from(store_reachable: bool) -> Self {
        if store_reachable {
            CatalogStatus::Ok
        } else {
            CatalogStatus::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    pub status: CatalogStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn catalog_health(State(state): State<AppState>) -> Json<CatalogHealth> {
    let db_healthy = state.store.is_healthy().await;
    if !db_healthy {
        tracing::warn!("Health check could not reach the project store");
    }
    Json(CatalogHealth {
        status: db_healthy.into(),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
