//! Billing constants used throughout the clinic core crate.

/// Label of the line item every new bill starts with.
pub const CONSULTATION_FEE_LABEL: &str = "Consultation Fee";

/// Cost of the default consultation line item.
pub const CONSULTATION_FEE: f64 = 50.0;

/// Label of the surcharge line item added when a chronic patient schedules.
pub const CHRONIC_CARE_FEE_LABEL: &str = "Chronic Care Fee";

/// Fixed chronic care surcharge amount.
pub const CHRONIC_CARE_FEE: f64 = 20.0;
