//! Shared types for the woodview client.
//!
//! # Invariants
//! - Entities are ephemeral view-model objects, rebuilt from each snapshot.
//! - An entity id is only meaningful within a snapshot beyond "same id =
//!   same logical entity".

mod types;

pub use types::{Body, Entity, EntityId, PagePoint};
