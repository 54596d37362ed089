//! Row models.
//!
//! Each submodule holds the `FromRow` + `Serialize` structs matching a
//! table. Write inputs live in `catalog_core::project`.

pub mod project;
pub mod sector;
