use crate::model::Appointment;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Appointment>,
    pub listed: Vec<list::AppointmentView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, appointments: Vec<Appointment>) -> Self {
        self.affected = appointments;
        self
    }

    pub fn with_listed(mut self, views: Vec<list::AppointmentView>) -> Self {
        self.listed = views;
        self
    }
}

/// Optional overrides for an update. `None` keeps the stored value.
/// Only the name, dentist and reason are revisable; date, time, duration
/// and the remaining-days snapshot are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub patient_name: Option<String>,
    pub dentist_choice: Option<usize>,
    pub reason_choice: Option<usize>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.patient_name.is_none()
            && self.dentist_choice.is_none()
            && self.reason_choice.is_none()
    }
}
