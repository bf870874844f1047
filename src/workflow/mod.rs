pub mod question_ctx;
pub mod question_scan;

pub use question_ctx::QuestionCtx;
pub use question_scan::{assemble_record, QuestionScan, ScanOutcome, ScanStop};
