//! Domain building blocks for the project catalog.
//!
//! Holds the pieces with no database or HTTP dependency: id types, the
//! error taxonomy shared by the data and request layers, project input
//! validation, and the sector seed list.

pub mod error;
pub mod project;
pub mod seed;
pub mod types;
