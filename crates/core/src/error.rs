use crate::types::DbId;

/// Error kinds produced by the catalog's data-access operations.
///
/// The data layer converts every underlying store failure into one of
/// these; the request layer only decides which page to render for them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The store could not be reached (fatal at startup).
    #[error("Unable to connect to the database: {0}")]
    Connectivity(String),

    /// A write was rejected by input validation or a store constraint.
    #[error("{0}")]
    Validation(String),

    /// The referenced row does not exist.
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: DbId },

    /// Any other store failure.
    #[error("{0}")]
    Query(String),
}
