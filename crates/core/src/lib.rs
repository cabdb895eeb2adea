//! `numibank-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod policy;
pub mod validate;

pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::CustomerId;
pub use policy::LendingPolicy;
