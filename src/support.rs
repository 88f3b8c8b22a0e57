//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Extensions to [`uom`] and billing-unit conversions.

pub mod constraint;
pub mod units;
