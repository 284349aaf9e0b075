//! Application-wide constants

/// Default maximum upload size in megabytes
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 5;

/// Maximum number of words accepted in a project description
pub const MAX_DESCRIPTION_WORDS: usize = 100;

/// Folder used when an upload does not name one
pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";

/// Maximum length of an upload folder name
pub const MAX_FOLDER_NAME_LENGTH: usize = 64;

/// Base URL used for synthesized asset URLs in demo mode
pub const DEMO_STORAGE_BASE_URL: &str = "https://demo-storage.supabase.co";

/// Id prefix for records held by the in-memory store
pub const DEMO_ID_PREFIX: &str = "demo";

/// Id prefix for records written to the hosted database
pub const SUBMISSION_ID_PREFIX: &str = "submission";
