//! The clinic registry.
//!
//! `ClinicSystem` is the sole owner of all patients, doctors, and
//! appointments. Appointments are keyed by registry-assigned sequential ids;
//! records are never removed, so the stored order is the insertion order.

use chrono::{NaiveDate, NaiveTime};

use crate::appointment::{Appointment, AppointmentStatus};
use crate::doctor::Doctor;
use crate::error::{ClinicError, ClinicResult};
use crate::patient::Patient;
use crate::{AppointmentId, DoctorId, PatientId};

/// In-memory registry of patients, doctors, and appointments.
#[derive(Debug, Default)]
pub struct ClinicSystem {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    next_appointment_id: AppointmentId,
}

impl ClinicSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient, taking ownership.
    ///
    /// Id uniqueness is a caller obligation; a duplicate id would shadow the
    /// earlier registration in lookups.
    pub fn register_patient(&mut self, patient: Patient) {
        tracing::info!(patient = %patient.name(), id = patient.id(), "patient registered");
        self.patients.push(patient);
    }

    /// Registers a doctor, taking ownership.
    pub fn register_doctor(&mut self, doctor: Doctor) {
        tracing::info!(doctor = %doctor.name(), id = doctor.id(), "doctor registered");
        self.doctors.push(doctor);
    }

    /// Schedules an appointment for a registered patient with a registered
    /// doctor.
    ///
    /// The patient's category decides how the new record is decorated (see
    /// [`Patient::schedule_appointment`]); the registry assigns the id and
    /// stores the result.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatient` or `UnknownDoctor` if either id is not
    /// registered. The appointment collection is left untouched on error.
    pub fn create_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: NaiveTime,
        reason: &str,
    ) -> ClinicResult<AppointmentId> {
        if !self.doctors.iter().any(|d| d.id() == doctor_id) {
            tracing::warn!(doctor_id, "appointment rejected: doctor not found");
            return Err(ClinicError::UnknownDoctor(doctor_id));
        }
        let Some(patient) = self.patients.iter().find(|p| p.id() == patient_id) else {
            tracing::warn!(patient_id, "appointment rejected: patient not found");
            return Err(ClinicError::UnknownPatient(patient_id));
        };

        self.next_appointment_id += 1;
        let id = self.next_appointment_id;
        let appointment = patient.schedule_appointment(id, date, time, reason, doctor_id);
        self.appointments.push(appointment);
        Ok(id)
    }

    /// Cancels an appointment by id.
    ///
    /// Cancellation is a status transition; the record stays in the registry.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAppointment` if no appointment carries the id. No
    /// status is changed on error.
    pub fn cancel_appointment(&mut self, id: AppointmentId) -> ClinicResult<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(ClinicError::UnknownAppointment(id))?;
        appointment.update_status(AppointmentStatus::Canceled);
        tracing::info!(appointment = id, "appointment canceled");
        Ok(())
    }

    /// Looks up an appointment by id.
    pub fn appointment(&self, id: AppointmentId) -> ClinicResult<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.id() == id)
            .ok_or(ClinicError::UnknownAppointment(id))
    }

    /// Looks up an appointment by id for in-place mutation (prescription
    /// attachment, bill changes).
    pub fn appointment_mut(&mut self, id: AppointmentId) -> ClinicResult<&mut Appointment> {
        self.appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(ClinicError::UnknownAppointment(id))
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    pub fn patient_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id() == id)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// All appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }
}
