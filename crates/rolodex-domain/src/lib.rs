//! Rolodex Domain Layer
//!
//! This crate contains the core domain model for Rolodex: the entity
//! catalog (partners, companies, employees), typed contact events, and the
//! trait interface that the storage layer implements.
//!
//! ## Key Concepts
//!
//! - **Partner**: an external relationship counterpart, identified by name
//! - **Company**: an organization whose employees contact partners
//! - **Employee**: a person belonging to exactly one company
//! - **Contact**: one discrete interaction event (email, call, coffee)
//!   between an employee and a partner
//!
//! ## Architecture
//!
//! This crate has no external dependencies and holds pure business types
//! only. The in-memory store lives in `rolodex-store`; the relationship
//! analysis lives in `rolodex-report`. Both depend on this crate, never on
//! each other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod entity;
pub mod traits;

// Re-exports for convenience
pub use contact::{Contact, ContactType};
pub use entity::{Company, Employee, Partner};
pub use traits::Network;
