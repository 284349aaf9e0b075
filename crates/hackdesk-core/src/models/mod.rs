//! Domain models

pub mod asset;
pub mod submission;

pub use asset::{UploadFile, UploadedAsset};
pub use submission::{NewSubmission, SubmissionForm, SubmissionRecord};
