//! Energy units that [`uom`] does not cover.
//!
//! This crate uses [`uom`] for physical quantities (temperatures, ratios).
//!
//! ## Billing units
//!
//! Utilities bill gas and electricity in different units. [`BillingUnit`]
//! converts a price per billing unit into a price per BTU so the two fuels
//! can be compared directly.

mod billing;

pub use billing::{BTU_PER_KILOWATT_HOUR, BTU_PER_THERM, BillingUnit};
