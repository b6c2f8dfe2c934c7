pub mod controller;
pub mod local;
pub mod query;
pub mod remote;
pub mod state;

pub use controller::{FilterController, UrlUpdate, UrlWriter};
pub use local::{filter_records, record_matches, type_param_matches};
pub use query::QueryParams;
pub use remote::{BackendQuery, FetchGenerations, Generation};
pub use state::{
    CategoryEntry, CategoryTable, FilterField, FilterState, UnknownFilterField, MANAGE_USERS,
    PARAM_DATE, PARAM_STATUS, PARAM_TYPE, SHOW_ALL,
};
