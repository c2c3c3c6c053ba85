use chrono::{NaiveDate, NaiveTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::{ClinicSystem, Doctor, Patient, Prescription};

/// Runs the fixed demonstration sequence against an in-memory clinic
/// registry and prints the resulting records.
///
/// # Returns
/// * `Ok(())` - The scenario completed and every record was printed.
/// * `Err(anyhow::Error)` - A lookup in the scenario failed.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("++ Starting clinic registry demonstration");

    let mut clinic = ClinicSystem::new();

    clinic.register_doctor(Doctor::new(1, "Dr. Smith", "Cardiology"));
    clinic.register_doctor(Doctor::new(2, "Dr. Alice", "General"));

    let mut john = Patient::new(101, "John Doe", 30);
    john.record_history("2024-11-02: annual physical, no findings");

    let mut jane = Patient::chronic(102, "Jane Doe", 45, "Diabetes", date("2025-06-01")?);
    jane.record_history("2025-06-01: HbA1c 7.2%, dosage reviewed");

    clinic.register_patient(john);
    clinic.register_patient(jane);

    println!("--- Roster ---");
    for doctor in clinic.doctors() {
        println!("{doctor}");
    }
    for patient in clinic.patients() {
        println!("{patient}");
    }
    println!();

    clinic.create_appointment(101, 1, date("2025-09-10")?, time("10:00")?, "Routine Checkup")?;
    let follow_up = clinic.create_appointment(
        102,
        2,
        date("2025-09-15")?,
        time("14:00")?,
        "Diabetes Follow-up",
    )?;

    let mut prescription = Prescription::new();
    prescription.add_medicine("Metformin", "500mg twice a day");
    prescription.add_medicine("Insulin", "10 units daily");
    prescription.set_notes("Check blood sugar regularly");

    let appointment = clinic.appointment_mut(follow_up)?;
    appointment.attach_prescription(prescription);
    appointment.bill_mut().apply_insurance();

    println!("--- Appointments ---");
    for appointment in clinic.appointments() {
        println!("{appointment}");
    }

    Ok(())
}

fn date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(s.parse()?)
}

fn time(s: &str) -> anyhow::Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(s, "%H:%M")?)
}
