use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::dto::SupportRequestDto;
use crate::enums::{RecordCategory, RecordStatus, SupportKind};
use crate::shared::api_error::ApiError;
use crate::shared::vocabulary::{category_from_backend_type, status_to_backend, status_to_display};

/// Record identifier. The backend may send it as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecordId(n.to_string()),
            Raw::Text(s) => RecordId(s),
        })
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category-specific part of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Complaint { location: Option<String> },
    SupportRequest { support: SupportKind },
    Unknown { backend_type: String },
}

impl RecordKind {
    pub fn category(&self) -> RecordCategory {
        match self {
            RecordKind::Complaint { .. } => RecordCategory::Complaint,
            RecordKind::SupportRequest { .. } => RecordCategory::SupportRequest,
            RecordKind::Unknown { .. } => RecordCategory::Unknown,
        }
    }

    pub fn support_kind(&self) -> Option<SupportKind> {
        match self {
            RecordKind::SupportRequest { support } => Some(*support),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            RecordKind::Complaint { location } => location.as_deref(),
            _ => None,
        }
    }
}

/// Status as shown to the user.
///
/// Backend statuses this client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayStatus {
    Known(RecordStatus),
    Unrecognized(String),
}

impl DisplayStatus {
    pub fn from_backend(code: &str) -> Self {
        let label = status_to_display(code);
        match RecordStatus::from_display_name(&label) {
            Some(status) => DisplayStatus::Known(status),
            None => DisplayStatus::Unrecognized(label),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DisplayStatus::Known(status) => status.display_name(),
            DisplayStatus::Unrecognized(label) => label,
        }
    }

    pub fn known(&self) -> Option<RecordStatus> {
        match self {
            DisplayStatus::Known(status) => Some(*status),
            DisplayStatus::Unrecognized(_) => None,
        }
    }
}

impl From<RecordStatus> for DisplayStatus {
    fn from(status: RecordStatus) -> Self {
        DisplayStatus::Known(status)
    }
}

/// A complaint or support request in display vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub status: DisplayStatus,
    pub occurred_date: Option<NaiveDate>,
}

impl Record {
    /// Maps a backend row into display vocabulary.
    pub fn from_dto(dto: SupportRequestDto) -> Self {
        let kind = match category_from_backend_type(&dto.record_type) {
            (RecordCategory::Complaint, _) => RecordKind::Complaint {
                location: dto.location.filter(|l| !l.trim().is_empty()),
            },
            (RecordCategory::SupportRequest, Some(support)) => {
                RecordKind::SupportRequest { support }
            }
            _ => RecordKind::Unknown {
                backend_type: dto.record_type.clone(),
            },
        };

        let occurred_date = dto.date.as_deref().and_then(parse_record_date);

        Record {
            id: dto.id,
            kind,
            title: dto.title,
            description: dto.description,
            status: DisplayStatus::from_backend(&dto.status),
            occurred_date,
        }
    }

    pub fn category(&self) -> RecordCategory {
        self.kind.category()
    }

    /// Date in the `YYYY-MM-DD` form used by the `date` filter
    pub fn occurred_date_iso(&self) -> Option<String> {
        self.occurred_date
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Completed records take no further administrator action.
    pub fn accepts_admin_actions(&self) -> bool {
        self.status.known() != Some(RecordStatus::Completed)
    }

    /// Validates an administrator status change and returns the backend code to send.
    pub fn check_status_change(&self, new_display_status: &str) -> Result<&'static str, ApiError> {
        if !self.accepts_admin_actions() {
            return Err(ApiError::Rejected(format!(
                "O item {} já foi concluído e não pode ser alterado.",
                self.id
            )));
        }
        let code = status_to_backend(new_display_status).ok_or_else(|| {
            ApiError::Rejected(format!("Status inválido: \"{}\".", new_display_status))
        })?;
        if let (Some(current), Some(next)) = (self.status.known(), RecordStatus::from_code(code)) {
            if !current.can_move_to(next) {
                return Err(ApiError::Rejected(format!(
                    "Transição de status não permitida: {} → {}.",
                    current, next
                )));
            }
        }
        Ok(code)
    }
}

/// Accepts `YYYY-MM-DD` and full ISO timestamps.
fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
