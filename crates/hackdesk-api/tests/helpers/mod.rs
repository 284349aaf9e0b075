pub mod fixtures;

use axum_test::TestServer;
use hackdesk_api::setup::routes::setup_routes;
use hackdesk_api::AppState;
use hackdesk_core::{Config, TimestampIdStrategy};
use hackdesk_storage::PersistenceRouter;
use std::collections::HashMap;
use std::sync::Arc;

/// Returns the API path for a route, e.g. `api_path("/submit")` -> `/api/submit`.
pub fn api_path(path: &str) -> String {
    format!("{}{}", hackdesk_api::constants::API_PREFIX, path)
}

/// Build configuration from explicit variables only; the process environment is ignored.
/// Demo latency defaults to zero so tests don't sleep.
pub fn config_with(pairs: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("DEMO_LATENCY_MS".to_string(), "0".to_string());
    for (k, v) in pairs {
        vars.insert(k.to_string(), v.to_string());
    }
    let config = Config::from_lookup(|key| vars.get(key).cloned()).expect("test config");
    config.validate().expect("valid test config");
    config
}

/// Setup a test server around the full router (middleware included)
pub async fn setup_test_app_with(config: Config) -> TestServer {
    let persistence = PersistenceRouter::from_config(&config, Arc::new(TimestampIdStrategy))
        .expect("persistence router");
    let state = Arc::new(AppState::new(config.clone(), persistence));
    let router = setup_routes(&config, state).await.expect("routes");
    TestServer::new(router).expect("test server")
}

/// Setup a test server in demo mode with the extended schema
pub async fn setup_test_app() -> TestServer {
    setup_test_app_with(config_with(&[])).await
}
