//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `license_required` is the gate itself; `alert` is the presentational
//! banner it renders when the license is invalid.

pub mod alert;
pub mod license_required;
