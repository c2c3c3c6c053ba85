//! Appointment records and their lifecycle status.
//!
//! An appointment references its patient and doctor by id (lookup keys into
//! the registry, not ownership) and exclusively owns one prescription and one
//! bill. Appointments are never removed once scheduled; cancellation is a
//! status transition.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::bill::Bill;
use crate::error::ClinicError;
use crate::prescription::Prescription;
use crate::{AppointmentId, DoctorId, PatientId};

/// Closed set of appointment lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Canceled => "Canceled",
        };
        write!(f, "{text}")
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = ClinicError;

    /// Parses a status name, case-insensitively. Unrecognised text is
    /// rejected rather than stored as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "canceled" => Ok(AppointmentStatus::Canceled),
            _ => Err(ClinicError::InvalidStatus(s.to_string())),
        }
    }
}

/// A scheduled clinic visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    date: NaiveDate,
    time: NaiveTime,
    reason: String,
    status: AppointmentStatus,
    patient_id: PatientId,
    doctor_id: DoctorId,
    prescription: Prescription,
    bill: Bill,
}

impl Appointment {
    /// Creates a new appointment in the `Scheduled` state with an empty
    /// prescription and a default bill.
    pub fn new(
        id: AppointmentId,
        date: NaiveDate,
        time: NaiveTime,
        reason: impl Into<String>,
        patient_id: PatientId,
        doctor_id: DoctorId,
    ) -> Self {
        Self {
            id,
            date,
            time,
            reason: reason.into(),
            status: AppointmentStatus::Scheduled,
            patient_id,
            doctor_id,
            prescription: Prescription::new(),
            bill: Bill::new(),
        }
    }

    pub fn update_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }

    /// Attaches a prescription, replacing any previously attached one.
    pub fn attach_prescription(&mut self, prescription: Prescription) {
        self.prescription = prescription;
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn prescription(&self) -> &Prescription {
        &self.prescription
    }

    pub fn prescription_mut(&mut self) -> &mut Prescription {
        &mut self.prescription
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    pub fn bill_mut(&mut self) -> &mut Bill {
        &mut self.bill
    }
}

impl std::fmt::Display for Appointment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Appointment {} on {} at {} | Reason: {} | Status: {} | PatientID: {} | DoctorID: {}",
            self.id,
            self.date,
            self.time.format("%H:%M"),
            self.reason,
            self.status,
            self.patient_id,
            self.doctor_id,
        )?;
        write!(f, "{}", self.prescription)?;
        write!(f, "{}", self.bill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        let date = NaiveDate::from_ymd_opt(2025, 9, 10).expect("valid date");
        let time = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");
        Appointment::new(1, date, time, "Routine Checkup", 101, 1)
    }

    #[test]
    fn starts_scheduled() {
        assert_eq!(sample().status(), AppointmentStatus::Scheduled);
    }

    #[test]
    fn status_parse_rejects_unknown_text() {
        assert_eq!(
            "completed".parse::<AppointmentStatus>().expect("parse"),
            AppointmentStatus::Completed
        );
        let err = "postponed".parse::<AppointmentStatus>().unwrap_err();
        assert_eq!(err, ClinicError::InvalidStatus("postponed".to_string()));
    }

    #[test]
    fn attach_prescription_is_last_write_wins() {
        let mut appointment = sample();

        let mut first = Prescription::new();
        first.add_medicine("Aspirin", "75mg daily");
        appointment.attach_prescription(first);

        let mut second = Prescription::new();
        second.add_medicine("Metformin", "500mg twice a day");
        second.add_medicine("Insulin", "10 units daily");
        second.set_notes("Check blood sugar regularly");
        appointment.attach_prescription(second.clone());

        assert_eq!(appointment.prescription(), &second);
        assert_eq!(appointment.prescription().medicines().len(), 2);
        assert_eq!(
            appointment.prescription().notes(),
            "Check blood sugar regularly"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let mut appointment = sample();
        appointment.bill_mut().add_service("Blood Test", 25.0);
        appointment.prescription_mut().add_medicine("Aspirin", "75mg daily");

        let json = serde_json::to_string(&appointment).expect("serialize");
        let reparsed: Appointment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(appointment, reparsed);
    }
}
