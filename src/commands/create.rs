use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CitasError, Result};
use crate::model::{Appointment, Dentist, Reason, Status};
use crate::store::AppointmentStore;
use chrono::{Local, NaiveDate, NaiveTime};

/// Field values for a new appointment, already validated individually.
/// Dentist and reason arrive as the 1-based choices the operator picked.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub dentist_choice: usize,
    pub reason_choice: usize,
}

pub fn run<S: AppointmentStore>(store: &mut S, request: CreateRequest) -> Result<CmdResult> {
    let dentist = Dentist::from_index(request.dentist_choice)
        .ok_or(CitasError::InvalidDentistChoice(request.dentist_choice))?;
    let reason = Reason::from_index(request.reason_choice)
        .ok_or(CitasError::InvalidReasonChoice(request.reason_choice))?;

    // Cross-field check: date and time together must still lie in the
    // future, even if the date alone passed the early prompt check.
    let scheduled_at = request.date.and_time(request.time);
    let now = Local::now().naive_local();
    if scheduled_at <= now {
        return Err(CitasError::PastAppointment);
    }

    let appointment = Appointment {
        id: helpers::generate_id(store),
        patient_name: request.patient_name,
        date: request.date,
        time: request.time,
        duration_minutes: reason.duration_minutes(),
        dentist,
        reason,
        days_remaining: (scheduled_at - now).num_days(),
        status: Status::Vigente,
    };
    store.put(&appointment)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} scheduled for {} at {}",
        appointment.id,
        appointment.date,
        appointment.time.format("%H:%M")
    )));
    result.affected.push(appointment);
    Ok(result)
}
