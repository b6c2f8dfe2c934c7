use serde::{Deserialize, Serialize};

/// Lifecycle status of a complaint or support request
///
/// `Received → InReview → Forwarded → Completed`. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Received,
    InReview,
    Forwarded,
    Completed,
}

impl RecordStatus {
    /// Backend enum value
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Received => "RECEIVED",
            RecordStatus::InReview => "IN_REVIEW",
            RecordStatus::Forwarded => "FORWARDED",
            RecordStatus::Completed => "COMPLETED",
        }
    }

    /// Label shown in the UI and carried in the `status` query parameter
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Received => "recebido",
            RecordStatus::InReview => "em análise",
            RecordStatus::Forwarded => "encaminhado",
            RecordStatus::Completed => "completo",
        }
    }

    pub fn all() -> Vec<RecordStatus> {
        vec![
            RecordStatus::Received,
            RecordStatus::InReview,
            RecordStatus::Forwarded,
            RecordStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RECEIVED" => Some(RecordStatus::Received),
            "IN_REVIEW" => Some(RecordStatus::InReview),
            "FORWARDED" => Some(RecordStatus::Forwarded),
            "COMPLETED" => Some(RecordStatus::Completed),
            _ => None,
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        match name {
            "recebido" => Some(RecordStatus::Received),
            "em análise" => Some(RecordStatus::InReview),
            "encaminhado" => Some(RecordStatus::Forwarded),
            "completo" => Some(RecordStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RecordStatus::Completed)
    }

    /// Administrator-triggered transition check.
    ///
    /// Any status may be set from a non-terminal one (in-review can be entered
    /// directly, forwarded re-entered after an e-mail); nothing leaves Completed.
    pub fn can_move_to(&self, next: RecordStatus) -> bool {
        !self.is_terminal() || *self == next
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
