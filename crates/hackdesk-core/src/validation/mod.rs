//! Request validation
//!
//! Validation runs before any persistence attempt, so a rejected request never
//! produces a partial write.

pub mod submission;
pub mod upload;

pub use submission::{count_words, validate_submission};
pub use upload::{normalize_mime_type, validate_folder, validate_upload};
