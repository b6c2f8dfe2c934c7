use contracts::domain::a001_support_record::{
    ComplaintSubmission, ForwardEmailRequest, Record, RecordId, SupportRequestDto,
    SupportRequestSubmission, UpdateStatusRequest,
};
use contracts::enums::RecordStatus;
use contracts::shared::api_error::ApiError;
use contracts::shared::filters::{BackendQuery, FilterState};
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_url, complaint_form_url, json_body, no_body, request_form_url, send_empty, send_json,
    with_bearer,
};

const RESOURCE: &str = "/support-requests";

/// Fetch records, filtered by the backend
pub async fn list_records(token: Option<&str>, filters: &FilterState) -> Result<Vec<Record>, ApiError> {
    let mut url = api_url(RESOURCE)?;
    let query = BackendQuery::from_filter(filters).to_query_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    fetch_records(&url, token).await
}

/// Fetch every record visible to the signed-in user
pub async fn list_all_records(token: Option<&str>) -> Result<Vec<Record>, ApiError> {
    let url = api_url(RESOURCE)?;
    fetch_records(&url, token).await
}

async fn fetch_records(url: &str, token: Option<&str>) -> Result<Vec<Record>, ApiError> {
    let request = no_body(with_bearer(Request::get(url), token)?)?;
    let rows: Vec<SupportRequestDto> = send_json(request).await?;
    Ok(rows.into_iter().map(Record::from_dto).collect())
}

/// Change the status of a record.
///
/// Completed records and statuses without a backend code are refused before
/// anything is sent.
pub async fn update_status(token: Option<&str>, record: &Record, new_status: &str) -> Result<(), ApiError> {
    let code = record.check_status_change(new_status)?;
    let url = api_url(&format!("{}/{}/status", RESOURCE, record.id))?;
    let body = UpdateStatusRequest {
        status: code.to_string(),
    };
    let request = json_body(with_bearer(Request::patch(&url), token)?, &body)?;
    send_empty(request).await
}

/// Forward a record by e-mail
pub async fn forward(
    token: Option<&str>,
    record: &Record,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<(), ApiError> {
    if !record.accepts_admin_actions() {
        return Err(ApiError::Rejected(format!(
            "O item {} já foi concluído e não pode ser encaminhado.",
            record.id
        )));
    }
    if to.trim().is_empty() {
        return Err(ApiError::Rejected("Informe o destinatário.".to_string()));
    }
    let url = api_url(&format!("{}/{}/forward-email", RESOURCE, record.id))?;
    let payload = ForwardEmailRequest {
        to: to.trim().to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
    };
    let request = json_body(with_bearer(Request::post(&url), token)?, &payload)?;
    send_empty(request).await
}

pub async fn submit_complaint(token: Option<&str>, form: &ComplaintSubmission) -> Result<(), ApiError> {
    form.validate()?;
    let url = complaint_form_url()?;
    let request = json_body(with_bearer(Request::post(url), token)?, form)?;
    send_empty(request).await
}

pub async fn submit_support_request(
    token: Option<&str>,
    form: &SupportRequestSubmission,
) -> Result<(), ApiError> {
    form.validate()?;
    let url = request_form_url()?;
    let request = json_body(with_bearer(Request::post(url), token)?, form)?;
    send_empty(request).await
}

/// Optimistic local update after a successful mutation
pub fn set_local_status(records: &mut [Record], id: &RecordId, status: RecordStatus) {
    if let Some(record) = records.iter_mut().find(|r| &r.id == id) {
        record.status = status.into();
    }
}
