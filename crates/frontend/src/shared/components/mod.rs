pub mod filter_controls;
pub mod record_card;

pub use filter_controls::FilterControls;
pub use record_card::RecordCard;
