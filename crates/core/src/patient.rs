//! Patient records and the polymorphic scheduling hook.
//!
//! Patient categories form a closed set of tagged variants rather than an
//! open hierarchy. The only behaviour that differs between categories is the
//! side effect applied to a freshly built appointment, so `PatientKind` is
//! dispatched at exactly that point and nowhere else. New categories (say,
//! paediatric or emergency intake) slot in as new variants without touching
//! the registry.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::constants::{CHRONIC_CARE_FEE, CHRONIC_CARE_FEE_LABEL};
use crate::{AppointmentId, DoctorId, PatientId};

/// Patient category, carrying any category-specific fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientKind {
    /// Standard patient with no extra scheduling behaviour.
    Standard,
    /// Chronic-care patient; scheduling adds the chronic care surcharge and
    /// annotates the visit reason.
    Chronic {
        condition_type: String,
        last_checkup: NaiveDate,
    },
}

/// A registered patient and their medical history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    medical_history: Vec<String>,
    kind: PatientKind,
}

impl Patient {
    /// Creates a standard patient.
    pub fn new(id: PatientId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            medical_history: Vec::new(),
            kind: PatientKind::Standard,
        }
    }

    /// Creates a chronic-care patient.
    pub fn chronic(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        condition_type: impl Into<String>,
        last_checkup: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            medical_history: Vec::new(),
            kind: PatientKind::Chronic {
                condition_type: condition_type.into(),
                last_checkup,
            },
        }
    }

    /// Appends a free-text entry to the medical history. Entries are kept in
    /// insertion order and never deduplicated.
    pub fn record_history(&mut self, entry: impl Into<String>) {
        self.medical_history.push(entry.into());
    }

    /// Builds the appointment for this patient, applying any
    /// category-specific decoration to the new record.
    ///
    /// The caller (the registry) owns the appointment collection and appends
    /// the returned record; this hook only decides what the record looks
    /// like.
    pub fn schedule_appointment(
        &self,
        id: AppointmentId,
        date: NaiveDate,
        time: NaiveTime,
        reason: &str,
        doctor_id: DoctorId,
    ) -> Appointment {
        match &self.kind {
            PatientKind::Standard => {
                tracing::info!(patient = %self.name, "appointment scheduled");
                Appointment::new(id, date, time, reason, self.id, doctor_id)
            }
            PatientKind::Chronic { .. } => {
                tracing::info!(
                    patient = %self.name,
                    "chronic patient requires frequent checkups"
                );
                let mut appointment = Appointment::new(
                    id,
                    date,
                    time,
                    format!("{reason} (Chronic Care)"),
                    self.id,
                    doctor_id,
                );
                appointment
                    .bill_mut()
                    .add_service(CHRONIC_CARE_FEE_LABEL, CHRONIC_CARE_FEE);
                appointment
            }
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }

    pub fn kind(&self) -> &PatientKind {
        &self.kind
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient: {} (ID: {}, Age: {})\nHistory: ",
            self.name, self.id, self.age
        )?;
        for entry in &self.medical_history {
            write!(f, "{entry}; ")?;
        }
        if let PatientKind::Chronic {
            condition_type,
            last_checkup,
        } = &self.kind
        {
            write!(
                f,
                "\nCondition: {condition_type} | Last Checkup: {last_checkup}"
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn standard_scheduling_builds_the_appointment_as_given() {
        let patient = Patient::new(101, "John Doe", 30);
        let appointment =
            patient.schedule_appointment(1, date(2025, 9, 10), time(10, 0), "Routine Checkup", 1);

        assert_eq!(appointment.patient_id(), 101);
        assert_eq!(appointment.doctor_id(), 1);
        assert_eq!(appointment.reason(), "Routine Checkup");
        assert_eq!(appointment.bill().total(), 50.0);
    }

    #[test]
    fn chronic_scheduling_adds_surcharge_and_reason_suffix() {
        let patient = Patient::chronic(102, "Jane Doe", 45, "Diabetes", date(2025, 6, 1));
        let appointment = patient.schedule_appointment(
            2,
            date(2025, 9, 15),
            time(14, 0),
            "Diabetes Follow-up",
            2,
        );

        assert!(appointment.reason().ends_with(" (Chronic Care)"));
        assert_eq!(appointment.bill().total(), 70.0);
        let surcharge = appointment.bill().line_items().last().expect("line item");
        assert_eq!(surcharge.service, "Chronic Care Fee");
        assert_eq!(surcharge.cost, 20.0);
    }

    #[test]
    fn history_grows_in_order_without_dedup() {
        let mut patient = Patient::new(101, "John Doe", 30);
        patient.record_history("flu shot");
        patient.record_history("flu shot");
        assert_eq!(patient.medical_history(), ["flu shot", "flu shot"]);
    }

    #[test]
    fn chronic_display_includes_condition_trailer() {
        let patient = Patient::chronic(102, "Jane Doe", 45, "Diabetes", date(2025, 6, 1));
        let rendered = patient.to_string();
        assert!(rendered.contains("Condition: Diabetes | Last Checkup: 2025-06-01"));
    }
}
