use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";

/// (value, label) options of the complaint kind select
pub const COMPLAINT_KINDS: &[(&str, &str)] = &[
    ("assedio", "Assédio"),
    ("discriminacao", "Discriminação"),
    ("violencia", "Violência"),
    ("outros", "Outros"),
];

pub const SUPPORT_REQUEST_KINDS: &[(&str, &str)] = &[
    ("psicologico", "Apoio Psicológico"),
    ("juridico", "Apoio Jurídico"),
    ("social", "Apoio Social"),
    ("outros", "Outros"),
];

pub const SERVICE_PREFERENCES: &[(&str, &str)] =
    &[("online", "Online"), ("presencial", "Presencial")];

pub const PROFESSIONAL_GENDER_PREFERENCES: &[(&str, &str)] = &[
    ("sem_preferencia", "Sem preferência"),
    ("feminino", "Feminino"),
    ("masculino", "Masculino"),
    ("nao_binario", "Não binário"),
];

pub const DEFAULT_STATE: &str = "Bahia";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(v, _)| *v == value)
}

/// New complaint form ("Nova denúncia")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSubmission {
    pub title: String,
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub state: String,
    pub accepted_terms: bool,
}

impl ComplaintSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.title)
            || is_blank(&self.description)
            || !is_option(COMPLAINT_KINDS, &self.kind)
            || !self.accepted_terms
        {
            return Err(ApiError::Rejected(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

/// New support request form ("Nova solicitação")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequestSubmission {
    pub title: String,
    pub kind: String,
    pub reason: String,
    pub service_preference: String,
    pub professional_gender_preference: String,
    pub accepted_terms: bool,
}

impl SupportRequestSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.title)
            || is_blank(&self.reason)
            || !is_option(SUPPORT_REQUEST_KINDS, &self.kind)
            || !is_option(SERVICE_PREFERENCES, &self.service_preference)
            || !is_option(
                PROFESSIONAL_GENDER_PREFERENCES,
                &self.professional_gender_preference,
            )
            || !self.accepted_terms
        {
            return Err(ApiError::Rejected(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint() -> ComplaintSubmission {
        ComplaintSubmission {
            title: "Agressão verbal".into(),
            kind: "discriminacao".into(),
            description: "Ocorreu no ponto de ônibus".into(),
            occurred_date: Some("2025-05-20".into()),
            location: None,
            city: Some("Salvador".into()),
            state: DEFAULT_STATE.into(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_complaint_validation() {
        assert!(complaint().validate().is_ok());

        let mut missing_terms = complaint();
        missing_terms.accepted_terms = false;
        assert_eq!(
            missing_terms.validate(),
            Err(ApiError::Rejected(REQUIRED_FIELDS_MESSAGE.to_string()))
        );

        let mut blank_title = complaint();
        blank_title.title = "   ".into();
        assert!(blank_title.validate().is_err());

        let mut bad_kind = complaint();
        bad_kind.kind = "".into();
        assert!(bad_kind.validate().is_err());
    }

    #[test]
    fn test_complaint_serializes_camel_case_without_empty_optionals() {
        let json = serde_json::to_value(complaint()).unwrap();
        assert_eq!(json["occurredDate"], "2025-05-20");
        assert_eq!(json["acceptedTerms"], true);
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_support_request_validation() {
        let mut request = SupportRequestSubmission {
            title: "Preciso de apoio".into(),
            kind: "juridico".into(),
            reason: "Orientação sobre processo".into(),
            service_preference: "online".into(),
            professional_gender_preference: "sem_preferencia".into(),
            accepted_terms: true,
        };
        assert!(request.validate().is_ok());

        request.service_preference = String::new();
        assert!(request.validate().is_err());
    }
}
