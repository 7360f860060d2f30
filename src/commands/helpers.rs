use crate::model::AppointmentId;
use crate::store::AppointmentStore;
use rand::Rng;

const ID_LEN: usize = 6;
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a fresh 6-character uppercase alphanumeric ID, regenerating
/// on collision with the stored book. The 36^6 keyspace makes exhaustion
/// a non-concern, so there is no retry bound.
pub fn generate_id<S: AppointmentStore>(store: &S) -> AppointmentId {
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (0..ID_LEN)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect();
        let id = AppointmentId::new(id);
        if !store.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures::future_appointment, InMemoryStore};

    #[test]
    fn ids_are_six_uppercase_alphanumeric_chars() {
        let store = InMemoryStore::new();
        for _ in 0..100 {
            let id = generate_id(&store);
            assert_eq!(id.as_str().len(), 6);
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn generated_ids_avoid_stored_ones() {
        let mut store = InMemoryStore::new();
        for i in 0..50 {
            let id = generate_id(&store);
            assert!(!store.contains(&id));
            let mut appointment = future_appointment(id.as_str(), "Paciente");
            appointment.patient_name = format!("Paciente {i}");
            store.put(&appointment).unwrap();
        }
    }
}
