//! HTTP-level constants

/// Prefix for all API routes
pub const API_PREFIX: &str = "/api";

/// Room for multipart boundaries and the folder field on top of the file itself
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Methods advertised in preflight responses
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Headers advertised in preflight responses
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Hackathon submission successful!";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
