use std::sync::Arc;

use catalog_db::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Data-access operations over the catalog.
    pub store: Arc<dyn CatalogStore>,
    pub config: Arc<ServerConfig>,
}
