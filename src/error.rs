use crate::model::AppointmentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CitasError {
    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid dentist option: {0}")]
    InvalidDentistChoice(usize),

    #[error("Invalid reason option: {0}")]
    InvalidReasonChoice(usize),

    #[error("The appointment must be scheduled in the future")]
    PastAppointment,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CitasError {
    /// Validation failures, bad choices, past dates and unknown IDs are
    /// reported to the operator and retried; anything touching the file
    /// is fatal for the current operation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CitasError::Io(_) | CitasError::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, CitasError>;
