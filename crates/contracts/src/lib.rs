//! Shared contracts for the collectible marketplace.
//!
//! Domain aggregates, wire DTOs and pure decision logic used by both the
//! API layer and the presentation layer. Nothing in this crate touches
//! the network, the database or the wall clock implicitly: operations
//! that depend on "now" take it as a parameter.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;

// Re-exports for the most commonly used types
pub use domain::a001_collectible::{Collectible, CollectibleDetailView, CollectibleDto};
pub use domain::common::AccountAddress;
pub use enums::TransferEligibility;
