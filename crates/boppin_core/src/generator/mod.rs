//! Randomized party record generation.
//!
//! # Responsibility
//! - Produce one fresh `Party` per call from validated reference tables.
//! - Keep the random source injectable for deterministic tests.
//!
//! # Invariants
//! - Every generated record carries a freshly allocated unique ID.
//! - All numeric and date fields satisfy their documented ranges.

pub mod party_gen;
