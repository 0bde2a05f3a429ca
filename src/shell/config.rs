// Startup configuration, read once from the environment (and `.env` when present).

use crate::modules::cases::core::state::TransitionPolicy;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::shared::infrastructure::store::DEFAULT_STORE_TIMEOUT;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const BIND_VAR: &str = "CASE_ROUTING_BIND";
pub const STORE_TIMEOUT_VAR: &str = "CASE_ROUTING_STORE_TIMEOUT_MS";
pub const TRANSITION_POLICY_VAR: &str = "CASE_ROUTING_TRANSITION_POLICY";
pub const ATTACHMENT_BUCKET_VAR: &str = "CASE_ROUTING_ATTACHMENT_BUCKET";

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_ATTACHMENT_BUCKET: &str = "documentos";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub store_timeout: Duration,
    pub transition_policy: TransitionPolicy,
    pub attachment_bucket: String,
}

fn invalid(key: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset or blank keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = read(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_VAR, e))?;

        let store_timeout = match read(STORE_TIMEOUT_VAR) {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|e| invalid(STORE_TIMEOUT_VAR, e))?;
                if millis == 0 {
                    return Err(invalid(STORE_TIMEOUT_VAR, "must be greater than zero"));
                }
                Duration::from_millis(millis)
            }
            None => DEFAULT_STORE_TIMEOUT,
        };

        let transition_policy = match read(TRANSITION_POLICY_VAR) {
            Some(raw) => raw
                .parse::<TransitionPolicy>()
                .map_err(|e| invalid(TRANSITION_POLICY_VAR, e))?,
            None => TransitionPolicy::default(),
        };

        let attachment_bucket = read(ATTACHMENT_BUCKET_VAR).unwrap_or_else(|| DEFAULT_ATTACHMENT_BUCKET.to_string());

        Ok(Self {
            bind,
            store_timeout,
            transition_policy,
            attachment_bucket,
        })
    }

    /// Built-in catalogs, system clock and random suffixes, tuned by this configuration.
    pub fn workflow_settings(&self) -> WorkflowSettings {
        WorkflowSettings {
            store_timeout: self.store_timeout,
            transition_policy: self.transition_policy,
            ..WorkflowSettings::default()
        }
    }
}
