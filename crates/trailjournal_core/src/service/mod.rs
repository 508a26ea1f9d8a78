//! Core use-case services.
//!
//! # Responsibility
//! - Provide the shared CRUD pattern every screen instantiates.
//! - Compute display aggregates as pure functions of in-memory
//!   collections.

pub mod entries;
pub mod stats;
