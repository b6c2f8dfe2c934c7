pub mod record_category;
pub mod record_status;

pub use record_category::{RecordCategory, SupportKind, COMPLAINT_CODE};
pub use record_status::RecordStatus;
