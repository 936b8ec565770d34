//! Domain types and field rules shared by the persistence and HTTP layers.

pub mod error;
pub mod project;
pub mod types;
