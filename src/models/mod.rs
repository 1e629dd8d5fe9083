pub mod loaders;
pub mod question;

pub use loaders::{filter_eligible, load_eligible_questions, load_records};
pub use question::{AnswerRecord, Question, ResultEntry};
