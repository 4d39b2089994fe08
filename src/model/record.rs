use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix shared by every record identifier.
pub const ID_PREFIX: &str = "PROY-";

/// Identifier of a tracked project, e.g. `PROY-1001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_number(n: u64) -> Self {
        Self(format!("{ID_PREFIX}{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The integer after the prefix, if the id is exactly `PROY-<digits>`.
    pub fn numeric_suffix(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owning department of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Planeación y Evaluación")]
    Planning,
    #[serde(rename = "Infraestructura")]
    Infrastructure,
    #[serde(rename = "Recursos Humanos")]
    HumanResources,
    #[serde(rename = "Informática")]
    InformationTechnology,
    #[serde(rename = "Vinculación")]
    Outreach,
    #[serde(rename = "Dirección General")]
    GeneralDirectorate,
}

impl Area {
    pub fn all() -> &'static [Area] {
        &[
            Area::Planning,
            Area::Infrastructure,
            Area::HumanResources,
            Area::InformationTechnology,
            Area::Outreach,
            Area::GeneralDirectorate,
        ]
    }

    /// Department name as stored in the backing file.
    pub fn label(&self) -> &'static str {
        match self {
            Area::Planning => "Planeación y Evaluación",
            Area::Infrastructure => "Infraestructura",
            Area::HumanResources => "Recursos Humanos",
            Area::InformationTechnology => "Informática",
            Area::Outreach => "Vinculación",
            Area::GeneralDirectorate => "Dirección General",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a project.
///
/// Spanish aliases keep files written by the earlier tracker readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(alias = "Pendiente")]
    Pending,
    #[serde(rename = "In-Progress", alias = "En progreso")]
    InProgress,
    #[serde(alias = "Completado")]
    Completed,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Pending, Status::InProgress, Status::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In-Progress",
            Status::Completed => "Completed",
        }
    }

    /// Status assigned on the creation path. Only a full bar counts as done.
    pub fn from_initial_progress(progress: u8) -> Self {
        if progress >= 100 {
            Status::Completed
        } else {
            Status::Pending
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked project or activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "ID")]
    pub id: RecordId,
    #[serde(rename = "Name", alias = "Proyecto", default)]
    pub name: String,
    #[serde(rename = "Area", alias = "Área")]
    pub area: Area,
    #[serde(rename = "Owner", alias = "Responsable", default)]
    pub owner: String,
    #[serde(rename = "Status", alias = "Estatus")]
    pub status: Status,
    /// Percent complete, 0 to 100.
    #[serde(rename = "Progress", alias = "Avance (%)")]
    pub progress: u8,
    #[serde(rename = "StartDate", alias = "Fecha de inicio")]
    pub start: NaiveDate,
    #[serde(rename = "EndDate", alias = "Fecha estimada de término")]
    pub end: NaiveDate,
    #[serde(rename = "Notes", alias = "Comentarios", default)]
    pub notes: String,
}

/// Column names of the backing file, in order.
pub const COLUMNS: [&str; 9] = [
    "ID",
    "Name",
    "Area",
    "Owner",
    "Status",
    "Progress",
    "StartDate",
    "EndDate",
    "Notes",
];

/// Fields collected by the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub area: Area,
    pub owner: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub progress: u8,
    pub notes: String,
}

impl NewRecord {
    /// Blank form: starts today, due in thirty days, nothing done yet.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            area: Area::Planning,
            owner: String::new(),
            start: today,
            end: today + chrono::Duration::days(30),
            progress: 0,
            notes: String::new(),
        }
    }

    /// Turn the form into a stored record under `id`.
    pub fn into_record(self, id: RecordId) -> ProjectRecord {
        let progress = self.progress.min(100);
        ProjectRecord {
            id,
            name: self.name,
            area: self.area,
            owner: self.owner,
            status: Status::from_initial_progress(progress),
            progress,
            start: self.start,
            end: self.end,
            notes: self.notes,
        }
    }
}

/// The subset of fields the edit flow may change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordEdit {
    pub status: Status,
    pub progress: u8,
    pub notes: String,
}

impl RecordEdit {
    pub fn of(record: &ProjectRecord) -> Self {
        Self {
            status: record.status,
            progress: record.progress,
            notes: record.notes.clone(),
        }
    }
}
