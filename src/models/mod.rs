pub mod question;

pub use question::{Answer, QuestionRecord, QuestionType, SEE_IMAGE_ANSWER, UNKNOWN_ANSWER};
