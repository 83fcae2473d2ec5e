//! Domain records shared by the session state, services, and FFI layer.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep record shapes identical between in-memory use and serialization.
//!
//! # Invariants
//! - Records never carry UI or transport concerns; those live in the caller.
//! - Validation rules are enforced by the operations that mutate records.

pub mod checklist;
pub mod notification;
pub mod profile;
pub mod quiz;
