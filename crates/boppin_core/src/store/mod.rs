//! Store layer abstraction and the in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract for the ordered party list.
//! - Keep collection details away from service orchestration.
//!
//! # Invariants
//! - Head insertion is the only mutation a store permits.
//! - Filter queries never alter store state.

pub mod party_store;
