//! In-memory filtering of an already fetched record list.

use super::state::FilterState;
use crate::domain::a001_support_record::{Record, RecordKind};
use crate::enums::{SupportKind, COMPLAINT_CODE};

/// Whether `record` matches a `type` filter value.
///
/// Accepts the user vocabulary (`denuncia`, `solicitacao`) and the backend one
/// (`COMPLAINT`, `JURIDICO`, `PSICOLOGICO`), comma-separated. Empty means all.
pub fn type_param_matches(type_param: &str, record: &Record) -> bool {
    let tokens: Vec<&str> = type_param
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return true;
    }

    tokens.iter().any(|token| match (*token, &record.kind) {
        ("denuncia", RecordKind::Complaint { .. }) => true,
        (t, RecordKind::Complaint { .. }) if t == COMPLAINT_CODE => true,
        ("solicitacao", RecordKind::SupportRequest { .. }) => true,
        (t, RecordKind::SupportRequest { support }) => SupportKind::from_code(t) == Some(*support),
        _ => false,
    })
}

pub fn record_matches(record: &Record, state: &FilterState) -> bool {
    if !type_param_matches(&state.type_param, record) {
        return false;
    }
    if let Some(date) = state.date.as_deref() {
        if record.occurred_date_iso().as_deref() != Some(date) {
            return false;
        }
    }
    if let Some(status) = state.status.as_deref() {
        if record.status.label() != status {
            return false;
        }
    }
    true
}

/// Records matching every active filter, in their original order
pub fn filter_records(records: &[Record], state: &FilterState) -> Vec<Record> {
    records
        .iter()
        .filter(|r| record_matches(r, state))
        .cloned()
        .collect()
}
