use std::str::FromStr;

use thiserror::Error;

use super::query::QueryParams;

pub const PARAM_TYPE: &str = "type";
pub const PARAM_DATE: &str = "date";
pub const PARAM_STATUS: &str = "status";

pub const SHOW_ALL: &str = "Exibir tudo";
pub const MANAGE_USERS: &str = "Gerenciar Usuários";

/// One sidebar category and the `type` value it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: &'static str,
    pub type_param: &'static str,
    /// Set when the category lives on its own path instead of a query parameter
    pub route: Option<&'static str>,
}

impl CategoryEntry {
    pub const fn query(label: &'static str, type_param: &'static str) -> Self {
        Self {
            label,
            type_param,
            route: None,
        }
    }

    pub const fn route(label: &'static str, route: &'static str) -> Self {
        Self {
            label,
            type_param: "",
            route: Some(route),
        }
    }
}

/// Closed category → `type` parameter table of one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    list_path: &'static str,
    default_label: &'static str,
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    pub fn new(
        list_path: &'static str,
        default_label: &'static str,
        entries: Vec<CategoryEntry>,
    ) -> Self {
        Self {
            list_path,
            default_label,
            entries,
        }
    }

    /// The user's own history (`/records`)
    pub fn user() -> Self {
        Self::new(
            "/records",
            SHOW_ALL,
            vec![
                CategoryEntry::query(SHOW_ALL, ""),
                CategoryEntry::query("Denúncias feitas", "denuncia"),
                CategoryEntry::query("Solicitações feitas", "solicitacao"),
            ],
        )
    }

    /// Administrator dashboard (`/admin`), backend type vocabulary
    pub fn admin() -> Self {
        Self::new(
            "/admin",
            SHOW_ALL,
            vec![
                CategoryEntry::query(SHOW_ALL, ""),
                CategoryEntry::query("Denúncias", "COMPLAINT"),
                CategoryEntry::query("Solicitações", "JURIDICO,PSICOLOGICO"),
                CategoryEntry::route(MANAGE_USERS, "/admin/users"),
            ],
        )
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn list_path(&self) -> &'static str {
        self.list_path
    }

    pub fn default_label(&self) -> &'static str {
        self.default_label
    }

    pub fn entry(&self, label: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// `type` value of a category; unknown labels map to "all"
    pub fn type_param_for(&self, label: &str) -> &'static str {
        self.entry(label).map(|e| e.type_param).unwrap_or("")
    }

    /// Reverse lookup of a `type` value among query-based categories
    pub fn label_for_type(&self, type_param: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.route.is_none() && e.type_param == type_param)
            .map(|e| e.label)
    }

    /// Category owning `pathname` as its own route
    pub fn label_for_path(&self, pathname: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.route == Some(pathname))
            .map(|e| e.label)
    }

    /// Path a category is shown on
    pub fn path_for(&self, label: &str) -> &'static str {
        self.entry(label)
            .and_then(|e| e.route)
            .unwrap_or(self.list_path)
    }
}

/// Filter dimension addressed by `set_filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    ActiveCategory,
    Date,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter field: {0}")]
pub struct UnknownFilterField(pub String);

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activeCategory" | "activeLink" => Ok(FilterField::ActiveCategory),
            "date" => Ok(FilterField::Date),
            "status" => Ok(FilterField::Status),
            other => Err(UnknownFilterField(other.to_string())),
        }
    }
}

/// The three filter dimensions of a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    /// Always derived from `active_category`
    pub type_param: String,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl FilterState {
    /// Fresh state for a category: date and status cleared.
    pub fn for_category(table: &CategoryTable, label: &str) -> Self {
        Self {
            active_category: label.to_string(),
            type_param: table.type_param_for(label).to_string(),
            date: None,
            status: None,
        }
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Writes `type`, `date` and `status` into `params`, deleting empty ones.
    pub fn write_params(&self, params: &mut QueryParams) {
        params.set(PARAM_TYPE, &self.type_param);
        params.set(PARAM_DATE, self.date_str());
        params.set(PARAM_STATUS, self.status_str());
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_reverse_lookup() {
        let user = CategoryTable::user();
        assert_eq!(user.label_for_type("denuncia"), Some("Denúncias feitas"));
        assert_eq!(user.label_for_type(""), Some(SHOW_ALL));
        assert_eq!(user.label_for_type("usuarios"), None);

        let admin = CategoryTable::admin();
        assert_eq!(admin.label_for_type("JURIDICO,PSICOLOGICO"), Some("Solicitações"));
        assert_eq!(admin.label_for_path("/admin/users"), Some(MANAGE_USERS));
        assert_eq!(admin.path_for(MANAGE_USERS), "/admin/users");
        assert_eq!(admin.path_for("Denúncias"), "/admin");
    }

    #[test]
    fn test_filter_field_names() {
        assert_eq!("activeCategory".parse::<FilterField>(), Ok(FilterField::ActiveCategory));
        assert_eq!("date".parse::<FilterField>(), Ok(FilterField::Date));
        assert_eq!("status".parse::<FilterField>(), Ok(FilterField::Status));
        assert!("type".parse::<FilterField>().is_err());
    }

    #[test]
    fn test_for_category_clears_other_filters() {
        let state = FilterState::for_category(&CategoryTable::admin(), "Denúncias");
        assert_eq!(state.type_param, "COMPLAINT");
        assert_eq!(state.date, None);
        assert_eq!(state.status, None);
    }
}
