use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Placeholder token that forces demo mode when found in backend settings.
const DEMO_TOKEN: &str = "demo";

/// Persistence backend mode
///
/// Decided once from configuration at startup. `Demo` keeps submissions in
/// process memory; `Production` talks to the hosted database and object storage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    Demo,
    Production,
}

impl BackendMode {
    /// Resolve the mode from the backend endpoint and access credential.
    ///
    /// Missing or blank values, or either value containing the `demo`
    /// placeholder token, select demo mode.
    pub fn detect(url: Option<&str>, key: Option<&str>) -> Self {
        let usable = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .filter(|v| !v.to_lowercase().contains(DEMO_TOKEN))
                .is_some()
        };

        if usable(url) && usable(key) {
            BackendMode::Production
        } else {
            BackendMode::Demo
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, BackendMode::Demo)
    }
}

impl FromStr for BackendMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(BackendMode::Demo),
            "production" => Ok(BackendMode::Production),
            _ => Err(anyhow::anyhow!("Invalid backend mode: {}", s)),
        }
    }
}

impl Display for BackendMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BackendMode::Demo => write!(f, "demo"),
            BackendMode::Production => write!(f, "production"),
        }
    }
}
