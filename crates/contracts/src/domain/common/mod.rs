//! Common types shared by all aggregates

pub mod address;

// Re-exports
pub use address::AccountAddress;
