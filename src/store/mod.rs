//! # Storage Layer
//!
//! The [`AppointmentStore`] trait abstracts where the appointment book
//! lives so the command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production storage. The whole book is one CSV
//!   file with the fixed Spanish header row; every mutation rewrites it
//!   completely, so the in-memory map and the file never drift apart.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast isolated test execution.
//!
//! Single-process, single-threaded access is assumed throughout: there
//! is no locking, and a second writer on the same file is undefined
//! behavior.

use crate::error::Result;
use crate::model::{Appointment, AppointmentId};

pub mod fs;
pub mod memory;

/// Abstract interface over the appointment book.
///
/// Mutating operations persist immediately: after `put` or `remove`
/// returns `Ok`, the backing storage already reflects the change.
pub trait AppointmentStore {
    /// Get an appointment by ID.
    fn get(&self, id: &AppointmentId) -> Result<Appointment>;

    /// Insert or replace an appointment and persist.
    fn put(&mut self, appointment: &Appointment) -> Result<()>;

    /// Remove an appointment and persist, returning the removed record.
    fn remove(&mut self, id: &AppointmentId) -> Result<Appointment>;

    /// All appointments, in no particular order.
    fn list(&self) -> Result<Vec<Appointment>>;

    /// Collision probe for the ID generator.
    fn contains(&self, id: &AppointmentId) -> bool;
}
