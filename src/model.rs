use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of an appointment: six uppercase alphanumeric characters,
/// unique within the book and immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The clinic's fixed roster, selected by 1-based index in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dentist {
    Lopez,
    Martinez,
    Fernandez,
}

impl Dentist {
    pub const ALL: [Dentist; 3] = [Dentist::Lopez, Dentist::Martinez, Dentist::Fernandez];

    pub fn label(self) -> &'static str {
        match self {
            Dentist::Lopez => "Dra. López",
            Dentist::Martinez => "Dr. Martínez",
            Dentist::Fernandez => "Dra. Fernández",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_index(choice: usize) -> Option<Dentist> {
        Self::ALL.get(choice.checked_sub(1)?).copied()
    }
}

impl fmt::Display for Dentist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Dentist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Dentist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::ALL
            .iter()
            .find(|d| d.label() == s)
            .copied()
            .ok_or_else(|| serde::de::Error::custom(format!("unknown dentist: {s}")))
    }
}

/// Visit reason, selected by 1-based index. Each reason books a fixed
/// slot length; the duration is never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Limpieza,
    Extraccion,
    Revision,
}

impl Reason {
    pub const ALL: [Reason; 3] = [Reason::Limpieza, Reason::Extraccion, Reason::Revision];

    pub fn label(self) -> &'static str {
        match self {
            Reason::Limpieza => "Limpieza",
            Reason::Extraccion => "Extracción",
            Reason::Revision => "Revisión",
        }
    }

    pub fn duration_minutes(self) -> u32 {
        match self {
            Reason::Limpieza => 30,
            Reason::Extraccion => 45,
            Reason::Revision => 20,
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_index(choice: usize) -> Option<Reason> {
        Self::ALL.get(choice.checked_sub(1)?).copied()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Reason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::ALL
            .iter()
            .find(|r| r.label() == s)
            .copied()
            .ok_or_else(|| serde::de::Error::custom(format!("unknown reason: {s}")))
    }
}

/// Record status. Fixed to `Vigente` at creation; nothing in the
/// lifecycle transitions it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Vigente,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Vigente => f.write_str("Vigente"),
        }
    }
}

/// One scheduled clinic visit. Field order matches the persisted CSV
/// column order; the serde renames are the Spanish column headers.
///
/// `days_remaining` is a creation-time snapshot and is never refreshed
/// on load or update. The live days-and-hours view shown when listing is
/// recomputed each time instead (see `commands::list`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "ID")]
    pub id: AppointmentId,
    #[serde(rename = "Paciente")]
    pub patient_name: String,
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,
    #[serde(rename = "Hora", with = "hora_hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "Duración")]
    pub duration_minutes: u32,
    #[serde(rename = "Dentista")]
    pub dentist: Dentist,
    #[serde(rename = "Motivo")]
    pub reason: Reason,
    #[serde(rename = "Días Restantes")]
    pub days_remaining: i64,
    #[serde(rename = "Estado")]
    pub status: Status,
}

impl Appointment {
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Times persist as `HH:MM`, without the seconds chrono's default
/// serde representation carries.
mod hora_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_map_to_fixed_durations() {
        assert_eq!(Reason::Limpieza.duration_minutes(), 30);
        assert_eq!(Reason::Extraccion.duration_minutes(), 45);
        assert_eq!(Reason::Revision.duration_minutes(), 20);
    }

    #[test]
    fn choices_are_one_based() {
        assert_eq!(Dentist::from_index(1), Some(Dentist::Lopez));
        assert_eq!(Dentist::from_index(3), Some(Dentist::Fernandez));
        assert_eq!(Dentist::from_index(0), None);
        assert_eq!(Dentist::from_index(4), None);
        assert_eq!(Reason::from_index(2), Some(Reason::Extraccion));
        assert_eq!(Reason::from_index(0), None);
    }
}
