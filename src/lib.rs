//! # Dual-Fuel Models
//!
//! Economic models for dual-fuel HVAC systems, where an electric heat pump
//! and a gas furnace serve the same building.
//!
//! The headline model computes the *switchover temperature*: the outdoor
//! temperature below which burning gas is cheaper than running the heat pump.
//!
//! ```
//! use dual_fuel_models::models::hvac::switchover::switchover_temperature;
//!
//! let t = switchover_temperature(2.56, 3.72, 17.0, 47.0, 1.06, 0.125, 0.90).unwrap();
//! assert!((t - 31.24).abs() < 0.01);
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
