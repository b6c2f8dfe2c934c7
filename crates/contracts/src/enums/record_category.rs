use serde::{Deserialize, Serialize};

/// Record category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordCategory {
    Complaint,
    SupportRequest,
    /// Backend type this client does not know yet
    Unknown,
}

impl RecordCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordCategory::Complaint => "Denúncia",
            RecordCategory::SupportRequest => "Solicitação",
            RecordCategory::Unknown => "Desconhecido",
        }
    }
}

/// Kind of assistance asked for in a support request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    Legal,
    Psychological,
}

impl SupportKind {
    /// Backend type value
    pub fn code(&self) -> &'static str {
        match self {
            SupportKind::Legal => "JURIDICO",
            SupportKind::Psychological => "PSICOLOGICO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Legal => "jurídica",
            SupportKind::Psychological => "psicológica",
        }
    }

    pub fn all() -> Vec<SupportKind> {
        vec![SupportKind::Legal, SupportKind::Psychological]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "JURIDICO" => Some(SupportKind::Legal),
            "PSICOLOGICO" => Some(SupportKind::Psychological),
            _ => None,
        }
    }
}

/// Backend type value for complaints
pub const COMPLAINT_CODE: &str = "COMPLAINT";
