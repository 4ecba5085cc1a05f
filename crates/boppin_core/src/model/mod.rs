//! Domain model for party event records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by generation, storage and filtering.
//!
//! # Invariants
//! - Every record is identified by a stable `PartyId`.
//! - Records are immutable after creation; the store only reorders, never
//!   edits them.

pub mod party;
