pub mod admin;
pub mod complaint_form;
pub mod email_modal;
pub mod records;
pub mod request_form;
pub mod status_edit_modal;
