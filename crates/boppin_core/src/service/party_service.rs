//! Party use-case service.
//!
//! # Responsibility
//! - Provide the entry points a UI host calls: seed, create, search.
//! - Delegate record production to the generator and ordering to the store.
//!
//! # Invariants
//! - Every created record is head-inserted exactly once.
//! - Search never mutates the store.

use crate::generator::party_gen::PartyGenerator;
use crate::model::party::Party;
use crate::store::party_store::PartyStore;
use log::info;
use rand::Rng;

/// Number of records seeded at startup.
pub const INITIAL_PARTY_COUNT: usize = 3;

/// Use-case service wiring a [`PartyGenerator`] to a [`PartyStore`].
///
/// Owns both collaborators; single-threaded by design, callers serialize
/// access.
pub struct PartyService<R: Rng, S: PartyStore> {
    generator: PartyGenerator<R>,
    store: S,
}

impl<R: Rng, S: PartyStore> PartyService<R, S> {
    /// Creates a service from a configured generator and an empty or
    /// pre-populated store.
    pub fn new(generator: PartyGenerator<R>, store: S) -> Self {
        Self { generator, store }
    }

    /// Seeds the store with [`INITIAL_PARTY_COUNT`] records.
    ///
    /// Called once at startup by the host, before the list is first shown.
    pub fn seed_initial(&mut self) {
        for _ in 0..INITIAL_PARTY_COUNT {
            self.create_party();
        }
        info!(
            "event=store_seeded module=service status=ok count={}",
            INITIAL_PARTY_COUNT
        );
    }

    /// Generates one record, head-inserts it, and returns a copy.
    ///
    /// Maps one explicit "create" user action.
    pub fn create_party(&mut self) -> Party {
        let party = self.generator.generate();
        info!(
            "event=party_created module=service status=ok id={} name={}",
            party.id, party.name
        );
        self.store.insert_at_head(party.clone());
        party
    }

    /// Returns records matching `query`, most-recently-created first.
    ///
    /// Invoked once per change of the host's search input.
    pub fn search(&self, query: &str) -> Vec<Party> {
        self.store.filter_by_name(query)
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
