//! Core domain logic for the Boppin party list.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod generator;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{ConfigError, ReferenceTables};
pub use generator::party_gen::PartyGenerator;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::party::{Party, PartyId, PartyValidationError, PRICE_MAX, PRICE_MIN, PRICE_STEP};
pub use service::party_service::{PartyService, INITIAL_PARTY_COUNT};
pub use store::party_store::{MemoryPartyStore, PartyStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
