//! Filter state → backend list query, and stale-response bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::query::QueryParams;
use super::state::{FilterState, PARAM_DATE, PARAM_STATUS, PARAM_TYPE};
use crate::enums::{SupportKind, COMPLAINT_CODE};
use crate::shared::vocabulary::status_to_backend;

/// Query parameters of `GET /support-requests`, in backend vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendQuery {
    pub record_type: Option<String>,
    pub date: Option<String>,
    pub status: Option<&'static str>,
}

impl BackendQuery {
    pub fn from_filter(state: &FilterState) -> Self {
        let status = state.status.as_deref().and_then(|display| {
            let code = status_to_backend(display);
            if code.is_none() {
                log::warn!("remote filter: status {:?} has no backend code, omitted", display);
            }
            code
        });

        Self {
            record_type: backend_type_param(&state.type_param),
            date: state.date.clone(),
            status,
        }
    }

    /// Encoded query without the leading `?`; empty when nothing is filtered
    pub fn to_query_string(&self) -> String {
        let mut params = QueryParams::default();
        params.set(PARAM_TYPE, self.record_type.as_deref().unwrap_or(""));
        params.set(PARAM_DATE, self.date.as_deref().unwrap_or(""));
        params.set(PARAM_STATUS, self.status.unwrap_or(""));
        params.to_query_string()
    }
}

/// Translates user vocabulary tokens; backend tokens pass through.
fn backend_type_param(type_param: &str) -> Option<String> {
    let tokens: Vec<String> = type_param
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .flat_map(|t| match t {
            "denuncia" => vec![COMPLAINT_CODE.to_string()],
            "solicitacao" => SupportKind::all()
                .iter()
                .map(|k| k.code().to_string())
                .collect(),
            other => vec![other.to_string()],
        })
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(","))
    }
}

/// Issues increasing generation numbers for list requests.
///
/// Only the response of the latest generation may be applied.
#[derive(Debug, Clone, Default)]
pub struct FetchGenerations {
    latest: Arc<AtomicU64>,
}

impl FetchGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier one.
    pub fn begin(&self) -> Generation {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Generation {
            id,
            latest: Arc::clone(&self.latest),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl Generation {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::state::CategoryTable;

    #[test]
    fn test_admin_state_to_query() {
        let mut state = FilterState::for_category(&CategoryTable::admin(), "Solicitações");
        state.status = Some("em análise".to_string());
        state.date = Some("2025-05-21".to_string());

        let query = BackendQuery::from_filter(&state);
        assert_eq!(query.record_type.as_deref(), Some("JURIDICO,PSICOLOGICO"));
        assert_eq!(query.status, Some("IN_REVIEW"));
        assert_eq!(
            query.to_query_string(),
            "type=JURIDICO%2CPSICOLOGICO&date=2025-05-21&status=IN_REVIEW"
        );
    }

    #[test]
    fn test_user_vocabulary_is_translated() {
        let state = FilterState::for_category(&CategoryTable::user(), "Solicitações feitas");
        assert_eq!(
            BackendQuery::from_filter(&state).record_type.as_deref(),
            Some("JURIDICO,PSICOLOGICO")
        );
        let state = FilterState::for_category(&CategoryTable::user(), "Denúncias feitas");
        assert_eq!(BackendQuery::from_filter(&state).record_type.as_deref(), Some("COMPLAINT"));
    }

    #[test]
    fn test_unknown_status_and_empty_state() {
        let mut state = FilterState::for_category(&CategoryTable::admin(), "Exibir tudo");
        assert_eq!(BackendQuery::from_filter(&state).to_query_string(), "");

        state.status = Some("arquivado".to_string());
        let query = BackendQuery::from_filter(&state);
        assert_eq!(query.status, None);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_superseded_generation_is_stale() {
        let generations = FetchGenerations::new();
        let first = generations.begin();
        assert!(first.is_current());

        let second = generations.clone().begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }
}
