//! Heating, ventilation, and air conditioning models.
//!
//! This module contains models for equipment selection and operation in
//! buildings heated by more than one source.

pub mod switchover;
