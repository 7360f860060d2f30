use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AppointmentId;
use crate::store::AppointmentStore;

pub fn run<S: AppointmentStore>(store: &mut S, id: &AppointmentId) -> Result<CmdResult> {
    let removed = store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} for {} deleted",
        removed.id, removed.patient_name
    )));
    result.affected.push(removed);
    Ok(result)
}
