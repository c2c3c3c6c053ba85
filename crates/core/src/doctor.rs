use serde::{Deserialize, Serialize};

use crate::DoctorId;

/// A doctor's identity record. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialty: String,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Doctor: {} (ID: {}, Specialty: {})",
            self.name, self.id, self.specialty
        )
    }
}
