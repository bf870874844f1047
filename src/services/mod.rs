pub mod anchor_finder;
pub mod answer_marker;
pub mod json_writer;
pub mod quality_validator;
pub mod text_normalizer;

pub use anchor_finder::{AnchorFinder, QuestionAnchor};
pub use answer_marker::AnswerMarker;
pub use json_writer::{output_path_for, JsonWriter};
pub use quality_validator::{QualityValidator, ValidationReport};
pub use text_normalizer::{clean_pre_block, clean_text};
