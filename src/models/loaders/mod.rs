pub mod json_loader;

pub use json_loader::{filter_eligible, is_eligible_record, load_eligible_questions, load_records};
