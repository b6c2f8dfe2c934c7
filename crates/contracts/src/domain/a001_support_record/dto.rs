use serde::{Deserialize, Serialize};

use super::aggregate::{Record, RecordId};

/// Row returned by `GET /support-requests`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequestDto {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default, alias = "occurredDate", alias = "occurred_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Body of `PATCH /support-requests/{id}/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Backend status code
    pub status: String,
}

/// Body of `POST /support-requests/{id}/forward-email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Pre-filled subject and body of the forward dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardEmailDraft {
    pub subject: String,
    pub body: String,
}

impl ForwardEmailDraft {
    pub fn for_record(record: &Record) -> Self {
        let type_label = record.category().display_name();
        let date = record
            .occurred_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut body = format!(
            "Detalhes da {}:\n\nTítulo: {}\nDescrição: {}\nData: {}\n",
            type_label, record.title, record.description, date
        );
        if let Some(location) = record.kind.location() {
            body.push_str(&format!("Local: {}\n", location));
        }
        body.push_str(&format!(
            "Status Atual: {}\n\nPor favor, tome as ações necessárias.",
            record.status.label()
        ));

        Self {
            subject: format!("Encaminhamento de {}: {}", type_label, record.title),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_draft_for_complaint() {
        let dto: SupportRequestDto = serde_json::from_str(
            r#"{"id":1,"type":"COMPLAINT","title":"Título da Denúncia 1","description":"descrição","status":"RECEIVED","date":"2025-05-20","location":"Rua das Flores, 123"}"#,
        )
        .unwrap();
        let draft = ForwardEmailDraft::for_record(&Record::from_dto(dto));

        assert_eq!(draft.subject, "Encaminhamento de Denúncia: Título da Denúncia 1");
        assert!(draft.body.contains("Data: 20/05/2025\n"));
        assert!(draft.body.contains("Local: Rua das Flores, 123\n"));
        assert!(draft.body.contains("Status Atual: recebido"));
    }

    #[test]
    fn test_forward_draft_for_support_request_has_no_location() {
        let dto: SupportRequestDto = serde_json::from_str(
            r#"{"id":2,"type":"PSICOLOGICO","title":"T","description":"D","status":"IN_REVIEW","location":"ignored"}"#,
        )
        .unwrap();
        let draft = ForwardEmailDraft::for_record(&Record::from_dto(dto));

        assert!(draft.subject.starts_with("Encaminhamento de Solicitação"));
        assert!(!draft.body.contains("Local:"));
        assert!(draft.body.contains("Data: -\n"));
    }
}
