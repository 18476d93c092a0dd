pub mod catalog;
pub mod classifier;
pub mod error;
pub mod normalize;
pub mod questions;
pub mod types;

pub use catalog::*;
pub use classifier::*;
pub use error::*;
pub use normalize::normalize;
pub use questions::{is_valid_option, question, question_bank, Question, QuestionOption};
pub use types::*;
