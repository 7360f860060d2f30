use super::AppointmentStore;
use crate::error::{CitasError, Result};
use crate::model::{Appointment, AppointmentId};
use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persisted column order. Written explicitly so an empty book still
/// produces a file with the header row.
const HEADER: [&str; 9] = [
    "ID",
    "Paciente",
    "Fecha",
    "Hora",
    "Duración",
    "Dentista",
    "Motivo",
    "Días Restantes",
    "Estado",
];

/// File-backed appointment store.
///
/// The entire book is loaded into memory on open and the whole file is
/// rewritten on every mutation. There are no partial writes to reason
/// about: after any `put` or `remove`, the file matches the map.
pub struct CsvStore {
    path: PathBuf,
    records: HashMap<AppointmentId, Appointment>,
}

impl CsvStore {
    /// Open the store at `path`, loading any existing records. A missing
    /// file is an empty book, not an error; a malformed file is fatal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match File::open(&path) {
            Ok(file) => {
                let mut reader = csv::Reader::from_reader(file);
                let mut records = HashMap::new();
                for row in reader.deserialize() {
                    let appointment: Appointment = row?;
                    records.insert(appointment.id.clone(), appointment);
                }
                records
            }
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(CitasError::Io(e)),
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole file from the in-memory map. Rows are sorted by
    /// ID so the file is stable across runs.
    fn persist(&self) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;

        let mut rows: Vec<&Appointment> = self.records.values().collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        for appointment in rows {
            writer.serialize(appointment)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl AppointmentStore for CsvStore {
    fn get(&self, id: &AppointmentId) -> Result<Appointment> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| CitasError::NotFound(id.clone()))
    }

    fn put(&mut self, appointment: &Appointment) -> Result<()> {
        self.records
            .insert(appointment.id.clone(), appointment.clone());
        self.persist()
    }

    fn remove(&mut self, id: &AppointmentId) -> Result<Appointment> {
        let removed = self
            .records
            .remove(id)
            .ok_or_else(|| CitasError::NotFound(id.clone()))?;
        self.persist()?;
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<Appointment>> {
        Ok(self.records.values().cloned().collect())
    }

    fn contains(&self, id: &AppointmentId) -> bool {
        self.records.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dentist, Reason, Status};
    use chrono::{NaiveDate, NaiveTime};

    fn sample(id: &str, patient: &str) -> Appointment {
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

    #[test]
    fn missing_file_opens_as_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path().join("citas.csv")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn reopening_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citas.csv");

        let first = sample("AB12CD", "Ana Pérez");
        let second = Appointment {
            id: AppointmentId::new("ZZ99ZZ"),
            reason: Reason::Extraccion,
            duration_minutes: Reason::Extraccion.duration_minutes(),
            dentist: Dentist::Fernandez,
            days_remaining: 7,
            ..sample("ZZ99ZZ", "Luis Gómez")
        };

        let mut store = CsvStore::open(&path).unwrap();
        store.put(&first).unwrap();
        store.put(&second).unwrap();

        let reopened = CsvStore::open(&path).unwrap();
        assert_eq!(reopened.get(&first.id).unwrap(), first);
        assert_eq!(reopened.get(&second.id).unwrap(), second);
        assert_eq!(reopened.list().unwrap().len(), 2);
    }

    #[test]
    fn file_carries_the_fixed_header_and_hh_mm_times() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citas.csv");

        let mut store = CsvStore::open(&path).unwrap();
        store.put(&sample("AB12CD", "Ana Pérez")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "ID,Paciente,Fecha,Hora,Duración,Dentista,Motivo,Días Restantes,Estado"
        );
        assert!(contents.contains(",10:00,"));
    }

    #[test]
    fn remove_persists_and_reports_missing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citas.csv");

        let mut store = CsvStore::open(&path).unwrap();
        store.put(&sample("AB12CD", "Ana Pérez")).unwrap();
        store.remove(&AppointmentId::new("AB12CD")).unwrap();

        let err = store.remove(&AppointmentId::new("AB12CD")).unwrap_err();
        assert!(matches!(err, CitasError::NotFound(_)));

        let reopened = CsvStore::open(&path).unwrap();
        assert!(reopened.list().unwrap().is_empty());
    }
}
