use crate::{AppointmentId, DoctorId, PatientId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClinicError {
    #[error("no registered patient with id {0}")]
    UnknownPatient(PatientId),
    #[error("no registered doctor with id {0}")]
    UnknownDoctor(DoctorId),
    #[error("no appointment with id {0}")]
    UnknownAppointment(AppointmentId),
    #[error("unrecognised appointment status: {0}")]
    InvalidStatus(String),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
