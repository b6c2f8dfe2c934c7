//! Translation between the backend enum vocabulary and the display vocabulary.
//!
//! The two directions are not strict inverses: the admin type filter can be a
//! comma-joined multi-value (`JURIDICO,PSICOLOGICO`) that maps back to no
//! single category.

use crate::enums::{RecordCategory, RecordStatus, SupportKind, COMPLAINT_CODE};

/// Backend status code → display label.
///
/// Unknown codes are returned unchanged (with a warning) so that a status added
/// on the backend never breaks rendering.
pub fn status_to_display(backend_status: &str) -> String {
    match RecordStatus::from_code(backend_status) {
        Some(status) => status.display_name().to_string(),
        None => {
            log::warn!(
                "status_to_display: unknown backend status {:?}, keeping it as is",
                backend_status
            );
            backend_status.to_string()
        }
    }
}

/// Display label → backend status code.
///
/// `None` means "do not send this update".
pub fn status_to_backend(display_status: &str) -> Option<&'static str> {
    RecordStatus::from_display_name(display_status).map(|s| s.code())
}

/// Backend record type → (category, sub-kind).
pub fn category_from_backend_type(backend_type: &str) -> (RecordCategory, Option<SupportKind>) {
    if backend_type == COMPLAINT_CODE {
        return (RecordCategory::Complaint, None);
    }
    match SupportKind::from_code(backend_type) {
        Some(kind) => (RecordCategory::SupportRequest, Some(kind)),
        None => (RecordCategory::Unknown, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_from_display() {
        for s in ["recebido", "em análise", "encaminhado", "completo"] {
            let backend = status_to_backend(s).expect("known display status");
            assert_eq!(status_to_display(backend), s);
        }
    }

    #[test]
    fn test_status_to_backend_rejects_unknown() {
        assert_eq!(status_to_backend("arquivado"), None);
        assert_eq!(status_to_backend(""), None);
        assert_eq!(status_to_backend("RECEIVED"), None);
        assert_eq!(status_to_backend("Recebido"), None);
    }

    #[test]
    fn test_status_to_display_keeps_unknown() {
        assert_eq!(status_to_display("ARCHIVED"), "ARCHIVED");
        assert_eq!(status_to_display("IN_REVIEW"), "em análise");
    }

    #[test]
    fn test_category_from_backend_type() {
        assert_eq!(
            category_from_backend_type("COMPLAINT"),
            (RecordCategory::Complaint, None)
        );
        assert_eq!(
            category_from_backend_type("JURIDICO"),
            (RecordCategory::SupportRequest, Some(SupportKind::Legal))
        );
        assert_eq!(
            category_from_backend_type("PSICOLOGICO"),
            (RecordCategory::SupportRequest, Some(SupportKind::Psychological))
        );
        assert_eq!(
            category_from_backend_type("JURIDICO,PSICOLOGICO"),
            (RecordCategory::Unknown, None)
        );
    }
}
