use crate::commands::{AppointmentPatch, CmdMessage, CmdResult};
use crate::error::{CitasError, Result};
use crate::model::{AppointmentId, Dentist, Reason};
use crate::store::AppointmentStore;

pub fn run<S: AppointmentStore>(
    store: &mut S,
    id: &AppointmentId,
    patch: AppointmentPatch,
) -> Result<CmdResult> {
    let mut appointment = store.get(id)?;

    if let Some(name) = patch.patient_name {
        appointment.patient_name = name;
    }
    if let Some(choice) = patch.dentist_choice {
        appointment.dentist =
            Dentist::from_index(choice).ok_or(CitasError::InvalidDentistChoice(choice))?;
    }
    if let Some(choice) = patch.reason_choice {
        // The slot was booked for the original length: changing the
        // reason does not rebook the duration.
        appointment.reason =
            Reason::from_index(choice).ok_or(CitasError::InvalidReasonChoice(choice))?;
    }

    // An all-blank patch still rewrites the file.
    store.put(&appointment)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} updated",
        appointment.id
    )));
    result.affected.push(appointment);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn overrides_only_the_given_fields() {
        let mut fixture = StoreFixture::new().with_appointment("AB12CD", "Ana Pérez");
        let id = AppointmentId::new("AB12CD");

        let patch = AppointmentPatch {
            dentist_choice: Some(2),
            ..Default::default()
        };
        run(&mut fixture.store, &id, patch).unwrap();

        let appointment = fixture.store.get(&id).unwrap();
        assert_eq!(appointment.dentist, Dentist::Martinez);
        assert_eq!(appointment.patient_name, "Ana Pérez");
        assert_eq!(appointment.reason, Reason::Limpieza);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut fixture = StoreFixture::new().with_appointment("AB12CD", "Ana Pérez");
        let id = AppointmentId::new("AB12CD");
        let before = fixture.store.get(&id).unwrap();

        run(&mut fixture.store, &id, AppointmentPatch::default()).unwrap();

        assert_eq!(fixture.store.get(&id).unwrap(), before);
    }

    #[test]
    fn changing_the_reason_keeps_the_booked_duration() {
        let mut fixture = StoreFixture::new().with_appointment("AB12CD", "Ana Pérez");
        let id = AppointmentId::new("AB12CD");

        let patch = AppointmentPatch {
            reason_choice: Some(2),
            ..Default::default()
        };
        run(&mut fixture.store, &id, patch).unwrap();

        let appointment = fixture.store.get(&id).unwrap();
        assert_eq!(appointment.reason, Reason::Extraccion);
        // Still the Limpieza slot length, not Extracción's 45.
        assert_eq!(appointment.duration_minutes, 30);
    }

    #[test]
    fn unknown_id_fails_and_leaves_the_store_unchanged() {
        let mut store = InMemoryStore::new();
        let id = AppointmentId::new("NOPE00");

        let err = run(&mut store, &id, AppointmentPatch::default()).unwrap_err();
        assert!(matches!(err, CitasError::NotFound(_)));
        assert!(store.list().unwrap().is_empty());
    }
}
