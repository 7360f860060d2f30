use super::AppointmentStore;
use crate::error::{CitasError, Result};
use crate::model::{Appointment, AppointmentId};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<AppointmentId, Appointment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppointmentStore for InMemoryStore {
    fn get(&self, id: &AppointmentId) -> Result<Appointment> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| CitasError::NotFound(id.clone()))
    }

    fn put(&mut self, appointment: &Appointment) -> Result<()> {
        self.records
            .insert(appointment.id.clone(), appointment.clone());
        Ok(())
    }

    fn remove(&mut self, id: &AppointmentId) -> Result<Appointment> {
        self.records
            .remove(id)
            .ok_or_else(|| CitasError::NotFound(id.clone()))
    }

    fn list(&self) -> Result<Vec<Appointment>> {
        Ok(self.records.values().cloned().collect())
    }

    fn contains(&self, id: &AppointmentId) -> bool {
        self.records.contains_key(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Dentist, Reason, Status};
    use chrono::{NaiveDate, NaiveTime};

    /// A far-future appointment so future-date checks never trip.
    pub fn future_appointment(id: &str, patient: &str) -> Appointment {
        Appointment {
            id: AppointmentId::new(id),
            patient_name: patient.to_string(),
            date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_minutes: Reason::Limpieza.duration_minutes(),
            dentist: Dentist::Lopez,
            reason: Reason::Limpieza,
            days_remaining: 100,
            status: Status::Vigente,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_appointment(mut self, id: &str, patient: &str) -> Self {
            let appointment = future_appointment(id, patient);
            self.store.put(&appointment).unwrap();
            self
        }
    }
}
