use crate::{BackendMode, MockStore, StorageError, StorageResult, SubmissionStore, SupabaseStore};
use hackdesk_core::{Config, IdStrategy};
use std::sync::Arc;

/// Create the submission store selected by configuration
pub fn create_store(
    config: &Config,
    ids: Arc<dyn IdStrategy>,
) -> StorageResult<Arc<dyn SubmissionStore>> {
    match config.mode() {
        BackendMode::Demo => {
            tracing::warn!("Backend credentials missing or placeholder; running in demo mode");
            Ok(Arc::new(MockStore::new(ids, config.demo_latency())))
        }
        BackendMode::Production => {
            let url = config.supabase_url().ok_or_else(|| {
                StorageError::ConfigError("SUPABASE_URL not configured".to_string())
            })?;
            let key = config.supabase_anon_key().ok_or_else(|| {
                StorageError::ConfigError("SUPABASE_ANON_KEY not configured".to_string())
            })?;

            let store = SupabaseStore::new(
                url,
                key,
                config.submissions_table(),
                config.storage_bucket(),
                config.request_timeout(),
                ids,
            )?;
            tracing::info!(store = ?store, "Using hosted Supabase backend");
            Ok(Arc::new(store))
        }
    }
}
