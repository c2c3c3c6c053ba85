//! # Clinic Core
//!
//! In-memory domain model for a clinic's patient, appointment, and billing
//! records.
//!
//! The [`ClinicSystem`] registry is the sole owner of all records. Patients
//! come in a closed set of categories ([`PatientKind`]) whose only
//! behavioural difference is how a freshly scheduled appointment is
//! decorated. Everything is single-threaded and synchronous; nothing is
//! persisted.

pub mod appointment;
pub mod bill;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod patient;
pub mod prescription;
pub mod registry;

pub use appointment::{Appointment, AppointmentStatus};
pub use bill::{Bill, LineItem, PaymentStatus};
pub use doctor::Doctor;
pub use error::{ClinicError, ClinicResult};
pub use patient::{Patient, PatientKind};
pub use prescription::{MedicineEntry, Prescription};
pub use registry::ClinicSystem;

/// Externally assigned patient identifier.
pub type PatientId = u32;

/// Externally assigned doctor identifier.
pub type DoctorId = u32;

/// Registry-assigned sequential appointment identifier.
pub type AppointmentId = u32;
