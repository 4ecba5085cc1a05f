//! Party generator over injected randomness.
//!
//! # Responsibility
//! - Draw each party field independently from its closed range.
//! - Anchor date offsets on an explicit creation date.
//!
//! # Invariants
//! - `price` is uniform in [5.0, 30.0], then quantized to the nearest 0.5.
//! - `start_date` is creation date + 1..=7 days.
//! - `end_date` is present with probability 0.5 and is creation date
//!   + 8..=14 days; it is not constrained against `start_date`.
//! - Draw order is fixed: name, asset, price, start offset, end presence,
//!   end offset. Deterministic rng streams rely on this.

use crate::config::ReferenceTables;
use crate::model::party::{Party, PRICE_MAX, PRICE_MIN, PRICE_STEP};
use chrono::{Days, Local, NaiveDate};
use rand::Rng;

const START_OFFSET_DAYS: std::ops::RangeInclusive<u64> = 1..=7;
const END_OFFSET_DAYS: std::ops::RangeInclusive<u64> = 8..=14;
const END_DATE_PROBABILITY: f64 = 0.5;

/// Produces randomized [`Party`] records from fixed reference tables.
///
/// Holds no state between calls beyond the rng stream and the read-only
/// tables. The rng is injected so tests can supply seeded or degenerate
/// sources.
#[derive(Debug)]
pub struct PartyGenerator<R: Rng> {
    tables: ReferenceTables,
    rng: R,
}

impl<R: Rng> PartyGenerator<R> {
    /// Creates a generator over validated tables and a random source.
    pub fn new(tables: ReferenceTables, rng: R) -> Self {
        Self { tables, rng }
    }

    /// The reference tables this generator draws from.
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Generates one party anchored on the current local date.
    pub fn generate(&mut self) -> Party {
        let today = Local::now().date_naive();
        self.generate_on(today)
    }

    /// Generates one party anchored on an explicit creation date.
    ///
    /// All random draws are independent; in particular the asset index is
    /// not correlated with the name index.
    pub fn generate_on(&mut self, today: NaiveDate) -> Party {
        let name_index = self.rng.gen_range(0..self.tables.names().len());
        let name = self.tables.names()[name_index].clone();

        let asset_index = self.rng.gen_range(0..self.tables.assets().len());
        let banner_asset = self.tables.assets()[asset_index].clone();

        let price = self.draw_price();
        let start_date = offset_date(today, self.rng.gen_range(START_OFFSET_DAYS));
        let end_date = if self.rng.gen_bool(END_DATE_PROBABILITY) {
            Some(offset_date(today, self.rng.gen_range(END_OFFSET_DAYS)))
        } else {
            None
        };

        Party::new(name, banner_asset, price, start_date, end_date)
    }

    fn draw_price(&mut self) -> f64 {
        let raw = self.rng.gen_range(PRICE_MIN..=PRICE_MAX);
        (raw / PRICE_STEP).round() * PRICE_STEP
    }
}

fn offset_date(today: NaiveDate, days: u64) -> NaiveDate {
    // Mirrors the source behavior of falling back to the anchor date on
    // calendar overflow, which cannot happen for sane anchors.
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}
