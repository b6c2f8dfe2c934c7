pub mod aggregate;
pub mod dto;
pub mod submission;

pub use aggregate::{DisplayStatus, Record, RecordId, RecordKind};
pub use dto::{ForwardEmailDraft, ForwardEmailRequest, SupportRequestDto, UpdateStatusRequest};
pub use submission::{ComplaintSubmission, SupportRequestSubmission};
