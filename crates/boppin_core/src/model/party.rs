//! Party domain model.
//!
//! # Responsibility
//! - Define the canonical event record produced by the generator.
//! - Provide validation helpers for externally supplied records.
//!
//! # Invariants
//! - `id` is stable and never reused for another party.
//! - `price` stays within [`PRICE_MIN`, `PRICE_MAX`] on a half-unit step.
//! - `end_date` carries no ordering constraint against `start_date`; both are
//!   independent forward offsets from the creation date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every party record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PartyId = Uuid;

/// Lowest admissible ticket price.
pub const PRICE_MIN: f64 = 5.0;
/// Highest admissible ticket price.
pub const PRICE_MAX: f64 = 30.0;
/// Prices are quantized to this increment.
pub const PRICE_STEP: f64 = 0.5;

const PRICE_STEP_TOLERANCE: f64 = 1e-9;

/// Canonical event record for the party list.
///
/// Immutable after creation. The optional `end_date` models open-ended
/// events; absence is represented by `None`, never by a sentinel date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Stable global ID used for list identity and de-duplication.
    pub id: PartyId,
    /// Display name, drawn from the configured candidate list.
    pub name: String,
    /// Opaque key referencing a banner asset; content is not validated.
    pub banner_asset: String,
    /// Ticket price in [5.0, 30.0], multiple of 0.5.
    pub price: f64,
    /// First day of the event, strictly after the creation date.
    pub start_date: NaiveDate,
    /// Optional last day of the event.
    pub end_date: Option<NaiveDate>,
}

impl Party {
    /// Creates a new party with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        banner_asset: impl Into<String>,
        price: f64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            name,
            banner_asset,
            price,
            start_date,
            end_date,
        )
    }

    /// Creates a party with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally. This
    /// constructor does not validate fields; call [`Party::validate`] when
    /// the input is not produced by the generator.
    pub fn with_id(
        id: PartyId,
        name: impl Into<String>,
        banner_asset: impl Into<String>,
        price: f64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            banner_asset: banner_asset.into(),
            price,
            start_date,
            end_date,
        }
    }

    /// Validates record-level invariants.
    ///
    /// Generator output always passes; this guards records supplied by a
    /// host (imports, fixtures, deserialized data).
    pub fn validate(&self) -> Result<(), PartyValidationError> {
        if self.id.is_nil() {
            return Err(PartyValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(PartyValidationError::EmptyName);
        }
        if !(PRICE_MIN..=PRICE_MAX).contains(&self.price) {
            return Err(PartyValidationError::PriceOutOfRange(self.price));
        }
        let steps = self.price / PRICE_STEP;
        if (steps - steps.round()).abs() > PRICE_STEP_TOLERANCE {
            return Err(PartyValidationError::PriceOffStep(self.price));
        }
        Ok(())
    }

    /// Returns whether `query` matches this party's name,
    /// case-insensitively.
    ///
    /// The empty query matches every record.
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Record-level validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PartyValidationError {
    NilId,
    EmptyName,
    PriceOutOfRange(f64),
    PriceOffStep(f64),
}

impl Display for PartyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "party id must not be nil"),
            Self::EmptyName => write!(f, "party name must not be empty"),
            Self::PriceOutOfRange(price) => write!(
                f,
                "price {price} outside admissible range [{PRICE_MIN}, {PRICE_MAX}]"
            ),
            Self::PriceOffStep(price) => {
                write!(f, "price {price} is not a multiple of {PRICE_STEP}")
            }
        }
    }
}

impl Error for PartyValidationError {}
