use boppin_core::{MemoryPartyStore, Party, PartyStore, ReferenceTables};
use chrono::NaiveDate;

fn party(name: &str) -> Party {
    let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    Party::new(name, "Party1", 10.0, start, None)
}

#[test]
fn worked_example_from_the_original_app() {
    let mut store = MemoryPartyStore::new();
    store.insert_at_head(party("Neon"));
    store.insert_at_head(party("80s"));

    let hits = store.filter_by_name("eo");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Neon");

    let all = store.filter_by_name("");
    let names: Vec<&str> = all.iter().map(|hit| hit.name.as_str()).collect();
    assert_eq!(names, ["80s", "Neon"]);
}

#[test]
fn empty_query_is_the_identity_filter() {
    let mut store = MemoryPartyStore::new();
    for name in ["Tropical", "Outer Space", "Under the Sea"] {
        store.insert_at_head(party(name));
    }

    let all = store.filter_by_name("");
    assert_eq!(all.len(), store.len());
    for (hit, stored) in all.iter().zip(store.parties()) {
        assert_eq!(hit.id, stored.id);
    }
}

#[test]
fn filter_equals_the_predicate_intersection() {
    let mut store = MemoryPartyStore::new();
    for name in ReferenceTables::builtin().names() {
        store.insert_at_head(party(name));
    }

    for query in ["a", "PARTY", "s", "zzz", "Wild"] {
        let hits = store.filter_by_name(query);

        let expected: Vec<&Party> = store
            .parties()
            .iter()
            .filter(|candidate| {
                candidate
                    .name
                    .to_lowercase()
                    .contains(&query.to_lowercase())
            })
            .collect();

        assert_eq!(hits.len(), expected.len(), "query {query:?}");
        for (hit, wanted) in hits.iter().zip(expected) {
            assert_eq!(hit.id, wanted.id, "query {query:?}");
        }
    }
}

#[test]
fn fresh_insert_is_first_hit_for_its_exact_name() {
    let mut store = MemoryPartyStore::new();
    store.insert_at_head(party("Masquerade"));
    store.insert_at_head(party("Foam party"));

    let inserted = party("Stoplight");
    let inserted_id = inserted.id;
    store.insert_at_head(inserted);

    for query in ["Stoplight", "stoplight", "STOPLIGHT"] {
        let hits = store.filter_by_name(query);
        assert!(!hits.is_empty(), "query {query:?}");
        assert_eq!(hits[0].id, inserted_id, "query {query:?}");
    }
}

#[test]
fn filter_results_are_detached_copies() {
    let mut store = MemoryPartyStore::new();
    store.insert_at_head(party("Neon"));

    let mut hits = store.filter_by_name("neon");
    hits[0].name = "mutated".to_string();
    hits.clear();

    assert_eq!(store.parties()[0].name, "Neon");
    assert_eq!(store.len(), 1);
}
