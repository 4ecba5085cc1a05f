//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `boppin_core` wiring without a
//!   UI host.
//! - Keep output structure deterministic; record content comes from a live
//!   rng.

use boppin_core::{MemoryPartyStore, PartyGenerator, PartyService, PartyStore, ReferenceTables};

fn main() {
    let tables = ReferenceTables::builtin();
    let generator = PartyGenerator::new(tables, rand::thread_rng());
    let mut service = PartyService::new(generator, MemoryPartyStore::new());

    service.seed_initial();
    let created = service.create_party();

    println!("boppin_core version={}", boppin_core::core_version());
    println!("created id={} name={:?}", created.id, created.name);

    println!("parties ({} total):", service.store().len());
    for party in service.search("") {
        let end = party
            .end_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "open".to_string());
        println!(
            "  {:<16} ${:>5.2}  {} -> {}",
            party.name, party.price, party.start_date, end
        );
    }

    let query = "party";
    let hits = service.search(query);
    println!("filter {query:?} matched {} record(s)", hits.len());
}
