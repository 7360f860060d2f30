//! # API Facade
//!
//! The single entry point for all appointment operations, regardless of
//! the UI driving them. It dispatches to the command layer and returns
//! structured `Result` types; it never prints, prompts, or exits.
//!
//! `CitasApi<S: AppointmentStore>` is generic over the storage backend:
//! production wires in `CsvStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::{Appointment, AppointmentId};
use crate::store::AppointmentStore;

pub use crate::commands::create::CreateRequest;
pub use crate::commands::list::AppointmentView;
pub use crate::commands::{AppointmentPatch, CmdMessage, CmdResult, MessageLevel};

/// The main API facade.
///
/// All UI clients (the CLI menu, a future web front, etc.) should
/// interact through this API.
pub struct CitasApi<S: AppointmentStore> {
    store: S,
}

impl<S: AppointmentStore> CitasApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, request: CreateRequest) -> Result<CmdResult> {
        commands::create::run(&mut self.store, request)
    }

    pub fn update(&mut self, id: &AppointmentId, patch: AppointmentPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete(&mut self, id: &AppointmentId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Current stored record, for UIs that show values before an update.
    pub fn get(&self, id: &AppointmentId) -> Result<Appointment> {
        self.store.get(id)
    }
}
