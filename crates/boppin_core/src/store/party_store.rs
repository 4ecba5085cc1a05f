//! Party store contract and in-memory implementation.
//!
//! # Responsibility
//! - Maintain the ordered party sequence, most-recently-inserted first.
//! - Answer case-insensitive name-substring filter queries.
//!
//! # Invariants
//! - Records are never mutated in place; the store only prepends.
//! - Filter results are fresh owned sequences in store order.
//! - The store provides no internal synchronization; callers serialize
//!   mutating calls.

use crate::model::party::Party;

/// Store interface for the ordered party list.
///
/// Kept as a trait so hosts can substitute their own backing collection
/// without touching service orchestration.
pub trait PartyStore {
    /// Prepends a record. The only mutation a store permits; infallible.
    fn insert_at_head(&mut self, party: Party);

    /// Returns records whose name contains `query` case-insensitively,
    /// in store order. The empty query returns the full sequence.
    ///
    /// Non-destructive and deterministic for a fixed store state.
    fn filter_by_name(&self, query: &str) -> Vec<Party>;

    /// All records in store order.
    fn parties(&self) -> &[Party];

    /// Number of stored records.
    fn len(&self) -> usize {
        self.parties().len()
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.parties().is_empty()
    }
}

/// In-memory party store backed by a `Vec`, head at index 0.
#[derive(Debug, Clone, Default)]
pub struct MemoryPartyStore {
    parties: Vec<Party>,
}

impl MemoryPartyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartyStore for MemoryPartyStore {
    fn insert_at_head(&mut self, party: Party) {
        self.parties.insert(0, party);
    }

    fn filter_by_name(&self, query: &str) -> Vec<Party> {
        if query.is_empty() {
            return self.parties.clone();
        }
        self.parties
            .iter()
            .filter(|party| party.name_matches(query))
            .cloned()
            .collect()
    }

    fn parties(&self) -> &[Party] {
        &self.parties
    }
}
