pub mod api_error;
pub mod filters;
pub mod vocabulary;
