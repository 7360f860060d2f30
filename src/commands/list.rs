use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Appointment;
use crate::store::AppointmentStore;
use chrono::Local;

/// A stored record plus the live time-remaining view.
///
/// `days_left`/`hours_left` are recomputed from the current moment on
/// every listing call. They are deliberately distinct from the record's
/// persisted `days_remaining`, which is a creation-time snapshot.
#[derive(Debug, Clone)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub days_left: i64,
    pub hours_left: i64,
}

impl AppointmentView {
    pub fn remaining(&self) -> String {
        format!("{} días y {} horas", self.days_left, self.hours_left)
    }
}

pub fn run<S: AppointmentStore>(store: &S) -> Result<CmdResult> {
    let now = Local::now().naive_local();
    let mut appointments = store.list()?;
    appointments.sort_by_key(Appointment::scheduled_at);

    let listed = appointments
        .into_iter()
        .map(|appointment| {
            let left = appointment.scheduled_at() - now;
            AppointmentView {
                days_left: left.num_days(),
                hours_left: left.num_hours() - left.num_days() * 24,
                appointment,
            }
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::future_appointment;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn recomputes_remaining_time_at_call_time() {
        let mut store = InMemoryStore::new();
        let mut appointment = future_appointment("AB12CD", "Ana Pérez");
        // Stale snapshot on purpose: the view must not echo it.
        appointment.days_remaining = 0;
        store.put(&appointment).unwrap();

        let result = run(&store).unwrap();
        let view = &result.listed[0];
        assert!(view.days_left > 300_000);
        assert!((0..24).contains(&view.hours_left));
        assert_ne!(view.days_left, view.appointment.days_remaining);
        assert!(view.remaining().contains("días"));
    }

    #[test]
    fn lists_in_schedule_order() {
        let mut store = InMemoryStore::new();
        let mut later = future_appointment("ZZ99ZZ", "Luis Gómez");
        later.date = NaiveDate::from_ymd_opt(2999, 6, 1).unwrap();
        store.put(&later).unwrap();
        store.put(&future_appointment("AB12CD", "Ana Pérez")).unwrap();

        let result = run(&store).unwrap();
        let ids: Vec<_> = result
            .listed
            .iter()
            .map(|v| v.appointment.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["AB12CD", "ZZ99ZZ"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed.is_empty());
    }
}
