//! Hackdesk Storage Library
//!
//! This crate provides the persistence seam for submissions and uploaded assets.
//! It includes the [`SubmissionStore`] trait, an in-memory [`MockStore`] used in
//! demo mode, the hosted [`SupabaseStore`], and the [`PersistenceRouter`] that
//! holds whichever one configuration selected at startup.
//!
//! # Object key format
//!
//! Uploaded assets live at `{folder}/{file_name}` where `file_name` is
//! `{token}-{unix millis}.{ext}`. Key generation is centralized in the `keys`
//! module so both backends stay consistent.

pub mod factory;
pub(crate) mod keys;
pub mod mock;
pub mod router;
pub mod supabase;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store;
pub use hackdesk_core::BackendMode;
pub use mock::MockStore;
pub use router::PersistenceRouter;
pub use supabase::SupabaseStore;
pub use traits::{StorageError, StorageResult, SubmissionStore};
