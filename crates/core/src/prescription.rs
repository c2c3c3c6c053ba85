use serde::{Deserialize, Serialize};

/// One prescribed medicine with its dosage instructions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineEntry {
    pub name: String,
    pub dosage: String,
}

/// An ordered list of prescribed medicines plus free-text notes.
///
/// Order is preserved and duplicate entries are allowed; a prescription
/// carries no validation of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    medicines: Vec<MedicineEntry>,
    notes: String,
}

impl Prescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a medicine/dosage pair.
    pub fn add_medicine(&mut self, name: impl Into<String>, dosage: impl Into<String>) {
        self.medicines.push(MedicineEntry {
            name: name.into(),
            dosage: dosage.into(),
        });
    }

    /// Sets the free-text notes, overwriting any prior notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn medicines(&self) -> &[MedicineEntry] {
        &self.medicines
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl std::fmt::Display for Prescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Prescription:")?;
        for entry in &self.medicines {
            writeln!(f, " - {} : {}", entry.name, entry.dosage)?;
        }
        if !self.notes.is_empty() {
            writeln!(f, "Notes: {}", self.notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_duplicates() {
        let mut prescription = Prescription::new();
        prescription.add_medicine("Metformin", "500mg twice a day");
        prescription.add_medicine("Insulin", "10 units daily");
        prescription.add_medicine("Metformin", "500mg twice a day");

        let names: Vec<&str> = prescription
            .medicines()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Metformin", "Insulin", "Metformin"]);
    }

    #[test]
    fn set_notes_overwrites() {
        let mut prescription = Prescription::new();
        prescription.set_notes("Check blood sugar regularly");
        prescription.set_notes("Review in two weeks");
        assert_eq!(prescription.notes(), "Review in two weeks");
    }

    #[test]
    fn display_omits_empty_notes() {
        let mut prescription = Prescription::new();
        prescription.add_medicine("Aspirin", "75mg daily");

        let rendered = prescription.to_string();
        assert!(rendered.contains(" - Aspirin : 75mg daily"));
        assert!(!rendered.contains("Notes:"));

        prescription.set_notes("With food");
        assert!(prescription.to_string().contains("Notes: With food"));
    }
}
