use super::query::QueryParams;
use super::state::{
    non_empty, CategoryTable, FilterField, FilterState, PARAM_DATE, PARAM_STATUS, PARAM_TYPE,
};

/// URL write produced by a filter change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlUpdate {
    Unchanged,
    /// Same page, new query: replaces the current history entry
    Replace(String),
    /// The category lives on another path
    Navigate(String),
}

impl UrlUpdate {
    pub fn write_to<W: UrlWriter + ?Sized>(&self, writer: &W) {
        match self {
            UrlUpdate::Unchanged => {}
            UrlUpdate::Replace(url) => writer.replace(url),
            UrlUpdate::Navigate(url) => writer.navigate(url),
        }
    }
}

/// Sink for URL writes (browser history, router, test recorder)
pub trait UrlWriter {
    /// Swap the current history entry without reloading
    fn replace(&self, url: &str);
    /// Go to another page
    fn navigate(&self, url: &str);
}

/// Single source of truth for a listing page's filters, bound to its URL.
///
/// Writes happen only from `set_filter`/`clear_filter` (or `apply` + an explicit
/// write by the caller); `sync_from_url` only reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterController {
    table: CategoryTable,
    pathname: String,
    params: QueryParams,
    state: FilterState,
}

impl FilterController {
    pub fn init_from_url(table: CategoryTable, search: &str, pathname: &str) -> Self {
        let params = QueryParams::parse(search);
        let state = derive_state(&table, &params, pathname);
        Self {
            table,
            pathname: pathname.to_string(),
            params,
            state,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// URL matching the current state
    pub fn current_url(&self) -> String {
        self.params.to_url(&self.pathname)
    }

    /// Commits a filter change and returns the URL write it requires.
    ///
    /// State and target URL are committed together; the caller performs the
    /// write right after (see `set_filter`).
    pub fn apply(&mut self, field: FilterField, value: &str) -> UrlUpdate {
        let value = value.trim();
        let next = match field {
            FilterField::ActiveCategory => match self.table.entry(value) {
                Some(entry) => FilterState::for_category(&self.table, entry.label),
                None => {
                    log::warn!("filters: unknown category {:?} ignored", value);
                    return UrlUpdate::Unchanged;
                }
            },
            FilterField::Date => FilterState {
                date: non_empty(Some(value)),
                ..self.state.clone()
            },
            FilterField::Status => FilterState {
                status: non_empty(Some(value)),
                ..self.state.clone()
            },
        };

        let target_path = match field {
            FilterField::ActiveCategory => self.table.path_for(&next.active_category).to_string(),
            _ => self.pathname.clone(),
        };

        let mut params = self.params.clone();
        next.write_params(&mut params);

        let path_changed = target_path != self.pathname;
        let query_changed = params != self.params;
        let url = params.to_url(&target_path);

        self.state = next;
        self.params = params;
        self.pathname = target_path;

        if path_changed {
            UrlUpdate::Navigate(url)
        } else if query_changed {
            UrlUpdate::Replace(url)
        } else {
            UrlUpdate::Unchanged
        }
    }

    /// Changes one filter and writes the URL synchronously.
    pub fn set_filter<W: UrlWriter + ?Sized>(
        &mut self,
        field: FilterField,
        value: &str,
        writer: &W,
    ) -> UrlUpdate {
        let update = self.apply(field, value);
        update.write_to(writer);
        update
    }

    pub fn clear_filter<W: UrlWriter + ?Sized>(&mut self, field: FilterField, writer: &W) -> UrlUpdate {
        self.set_filter(field, "", writer)
    }

    /// Re-reads the state after a URL change made elsewhere (back/forward,
    /// direct navigation). Never writes the URL. Returns whether the state changed.
    pub fn sync_from_url(&mut self, search: &str, pathname: &str) -> bool {
        let params = QueryParams::parse(search);
        let state = derive_state(&self.table, &params, pathname);
        let changed = state != self.state;
        self.params = params;
        self.pathname = pathname.to_string();
        self.state = state;
        changed
    }
}

fn derive_state(table: &CategoryTable, params: &QueryParams, pathname: &str) -> FilterState {
    let date = non_empty(params.get(PARAM_DATE));
    let status = non_empty(params.get(PARAM_STATUS));

    let label = table.label_for_path(pathname).unwrap_or_else(|| {
        let url_type = params.get(PARAM_TYPE).unwrap_or("").trim();
        table.label_for_type(url_type).unwrap_or_else(|| {
            if !url_type.is_empty() {
                log::debug!("filters: unknown type {:?}, using default category", url_type);
            }
            table.default_label()
        })
    });

    FilterState {
        active_category: label.to_string(),
        type_param: table.type_param_for(label).to_string(),
        date,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::state::{MANAGE_USERS, SHOW_ALL};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<(&'static str, String)>>,
    }

    impl UrlWriter for Recorder {
        fn replace(&self, url: &str) {
            self.writes.borrow_mut().push(("replace", url.to_string()));
        }

        fn navigate(&self, url: &str) {
            self.writes.borrow_mut().push(("navigate", url.to_string()));
        }
    }

    fn split(url: &str) -> (&str, &str) {
        url.split_once('?').unwrap_or((url, ""))
    }

    #[test]
    fn test_init_from_url_resolves_category() {
        let c = FilterController::init_from_url(
            CategoryTable::user(),
            "?type=denuncia&date=2025-05-20&status=recebido",
            "/records",
        );
        assert_eq!(c.state().active_category, "Denúncias feitas");
        assert_eq!(c.state().type_param, "denuncia");
        assert_eq!(c.state().date.as_deref(), Some("2025-05-20"));
        assert_eq!(c.state().status.as_deref(), Some("recebido"));
    }

    #[test]
    fn test_init_from_url_falls_back_to_default() {
        let c = FilterController::init_from_url(CategoryTable::user(), "?type=usuarios", "/records");
        assert_eq!(c.state().active_category, SHOW_ALL);
        assert_eq!(c.state().type_param, "");

        let c = FilterController::init_from_url(CategoryTable::admin(), "", "/admin");
        assert_eq!(c.state().active_category, SHOW_ALL);
    }

    #[test]
    fn test_manage_users_resolved_by_pathname() {
        let c = FilterController::init_from_url(CategoryTable::admin(), "?type=COMPLAINT", "/admin/users");
        assert_eq!(c.state().active_category, MANAGE_USERS);
        assert_eq!(c.state().type_param, "");
    }

    #[test]
    fn test_changing_category_clears_date_and_status() {
        let rec = Recorder::default();
        let mut c = FilterController::init_from_url(
            CategoryTable::user(),
            "?date=2025-05-20&status=recebido",
            "/records",
        );
        for label in ["Solicitações feitas", "Denúncias feitas", SHOW_ALL] {
            c.set_filter(FilterField::Date, "2025-05-22", &rec);
            c.set_filter(FilterField::Status, "completo", &rec);
            c.set_filter(FilterField::ActiveCategory, label, &rec);
            assert_eq!(c.state().date, None);
            assert_eq!(c.state().status, None);
            assert_eq!(c.state().active_category, label);
        }
    }

    #[test]
    fn test_set_filter_replaces_url_and_keeps_other_params() {
        let rec = Recorder::default();
        let mut c = FilterController::init_from_url(CategoryTable::user(), "?page=2&type=denuncia", "/records");

        let update = c.set_filter(FilterField::Status, "em análise", &rec);
        assert_eq!(
            update,
            UrlUpdate::Replace("/records?page=2&type=denuncia&status=em%20an%C3%A1lise".to_string())
        );
        assert_eq!(c.state().type_param, "denuncia");
        assert_eq!(rec.writes.borrow().len(), 1);
        assert_eq!(rec.writes.borrow()[0].0, "replace");

        c.clear_filter(FilterField::Status, &rec);
        assert_eq!(c.current_url(), "/records?page=2&type=denuncia");
    }

    #[test]
    fn test_unchanged_value_writes_nothing() {
        let rec = Recorder::default();
        let mut c = FilterController::init_from_url(CategoryTable::user(), "?status=recebido", "/records");
        assert_eq!(c.set_filter(FilterField::Status, "recebido", &rec), UrlUpdate::Unchanged);
        assert_eq!(c.clear_filter(FilterField::Date, &rec), UrlUpdate::Unchanged);
        assert!(rec.writes.borrow().is_empty());
    }

    #[test]
    fn test_manage_users_navigates() {
        let rec = Recorder::default();
        let mut c = FilterController::init_from_url(CategoryTable::admin(), "?type=COMPLAINT&status=recebido", "/admin");

        let update = c.set_filter(FilterField::ActiveCategory, MANAGE_USERS, &rec);
        assert_eq!(update, UrlUpdate::Navigate("/admin/users".to_string()));
        assert_eq!(c.state().active_category, MANAGE_USERS);

        let update = c.set_filter(FilterField::ActiveCategory, "Solicitações", &rec);
        assert_eq!(
            update,
            UrlUpdate::Navigate("/admin?type=JURIDICO%2CPSICOLOGICO".to_string())
        );
        assert_eq!(rec.writes.borrow()[1].0, "navigate");
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let rec = Recorder::default();
        let mut c = FilterController::init_from_url(CategoryTable::user(), "?status=recebido", "/records");
        assert_eq!(c.set_filter(FilterField::ActiveCategory, "Nada", &rec), UrlUpdate::Unchanged);
        assert_eq!(c.state().status.as_deref(), Some("recebido"));
    }

    #[test]
    fn test_round_trip_through_url() {
        let rec = Recorder::default();
        for table in [CategoryTable::user(), CategoryTable::admin()] {
            let labels: Vec<&str> = table
                .entries()
                .iter()
                .filter(|e| e.route.is_none())
                .map(|e| e.label)
                .collect();
            for label in labels {
                for date in ["", "2025-05-20"] {
                    for status in ["", "recebido", "em análise", "encaminhado", "completo"] {
                        let mut c = FilterController::init_from_url(table.clone(), "", table.list_path());
                        c.set_filter(FilterField::ActiveCategory, label, &rec);
                        c.set_filter(FilterField::Date, date, &rec);
                        c.set_filter(FilterField::Status, status, &rec);

                        let url = c.current_url();
                        let (path, search) = split(&url);
                        let reread = FilterController::init_from_url(table.clone(), search, path);
                        assert_eq!(reread.state(), c.state(), "url {}", url);
                    }
                }
            }
        }
    }

    #[test]
    fn test_clearing_is_commutative() {
        let rec = Recorder::default();
        let start = FilterController::init_from_url(
            CategoryTable::admin(),
            "?type=COMPLAINT&date=2025-05-20&status=recebido",
            "/admin",
        );

        let mut a = start.clone();
        a.clear_filter(FilterField::Date, &rec);
        a.clear_filter(FilterField::Status, &rec);

        let mut b = start.clone();
        b.clear_filter(FilterField::Status, &rec);
        b.clear_filter(FilterField::Date, &rec);

        assert_eq!(a.state(), b.state());
        assert_eq!(a.current_url(), b.current_url());
        assert_eq!(a.current_url(), "/admin?type=COMPLAINT");
    }

    #[test]
    fn test_sync_from_url_reports_changes_without_writing() {
        let mut c = FilterController::init_from_url(CategoryTable::user(), "", "/records");
        assert!(c.sync_from_url("?type=solicitacao", "/records"));
        assert_eq!(c.state().active_category, "Solicitações feitas");
        assert!(!c.sync_from_url("?type=solicitacao", "/records"));
        assert_eq!(c.current_url(), "/records?type=solicitacao");
    }
}
