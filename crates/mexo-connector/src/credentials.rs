//! Credential configuration per connector domain.
//!
//! Each domain publishes a field table for the interactive collection pass;
//! values end up in `MexoCredentials`, whose secrets never print.

use mexo_core::{Answers, FieldDescriptor, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::constants::DEFAULT_DOMAIN;
use crate::error::{ConnectorError, ConnectorResult};

pub const API_KEY_FIELD: &str = "mexo_api_key";
pub const API_SECRET_FIELD: &str = "mexo_api_secret";

/// One deployable flavour of the connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorDomain {
    /// Connector name as referenced by strategies (`mexo`, `mexo_us`).
    pub connector: &'static str,
    /// Domain suffix substituted into the URL templates.
    pub domain: &'static str,
    /// Prefix of the environment variables carrying the keys.
    pub env_prefix: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl ConnectorDomain {
    fn env_var(&self, suffix: &str) -> String {
        format!("{}_{suffix}", self.env_prefix)
    }
}

pub const MEXO: ConnectorDomain = ConnectorDomain {
    connector: "mexo",
    domain: DEFAULT_DOMAIN,
    env_prefix: "MEXO",
    fields: &[
        FieldDescriptor::connect_secret(API_KEY_FIELD, "Enter your Mexo API key"),
        FieldDescriptor::connect_secret(API_SECRET_FIELD, "Enter your Mexo API secret"),
    ],
};

pub const MEXO_US: ConnectorDomain = ConnectorDomain {
    connector: "mexo_us",
    domain: "us",
    env_prefix: "MEXO_US",
    fields: &[
        FieldDescriptor::connect_secret(API_KEY_FIELD, "Enter your Mexo US API key"),
        FieldDescriptor::connect_secret(API_SECRET_FIELD, "Enter your Mexo US API secret"),
    ],
};

pub const DOMAINS: &[ConnectorDomain] = &[MEXO, MEXO_US];

/// Find a domain by connector name.
pub fn domain(connector: &str) -> ConnectorResult<&'static ConnectorDomain> {
    DOMAINS
        .iter()
        .find(|d| d.connector == connector)
        .ok_or_else(|| ConnectorError::UnknownDomain(connector.to_string()))
}

/// API credentials for one connector domain.
#[derive(Debug, Clone, Deserialize)]
pub struct MexoCredentials {
    pub connector: String,
    pub mexo_api_key: SecretString,
    pub mexo_api_secret: SecretString,
}

impl MexoCredentials {
    pub fn new(connector: &str, api_key: SecretString, api_secret: SecretString) -> Self {
        Self {
            connector: connector.to_string(),
            mexo_api_key: api_key,
            mexo_api_secret: api_secret,
        }
    }

    /// Build from answers collected over `domain.fields`.
    pub fn from_answers(domain: &ConnectorDomain, answers: &Answers) -> ConnectorResult<Self> {
        let api_key = answers
            .get(API_KEY_FIELD)
            .ok_or(ConnectorError::MissingCredential(API_KEY_FIELD))?;
        let api_secret = answers
            .get(API_SECRET_FIELD)
            .ok_or(ConnectorError::MissingCredential(API_SECRET_FIELD))?;

        Ok(Self::new(
            domain.connector,
            SecretString::new(api_key),
            SecretString::new(api_secret),
        ))
    }

    /// Load from `{PREFIX}_API_KEY` / `{PREFIX}_API_SECRET`.
    pub fn from_env(domain: &ConnectorDomain) -> ConnectorResult<Self> {
        let key_var = domain.env_var("API_KEY");
        let secret_var = domain.env_var("API_SECRET");

        let api_key =
            std::env::var(&key_var).map_err(|_| ConnectorError::MissingCredential(API_KEY_FIELD))?;
        let api_secret = std::env::var(&secret_var)
            .map_err(|_| ConnectorError::MissingCredential(API_SECRET_FIELD))?;

        debug!(connector = domain.connector, env = %key_var, "Loaded credentials from environment");
        Ok(Self::new(
            domain.connector,
            SecretString::new(api_key),
            SecretString::new(api_secret),
        ))
    }

    /// Both keys present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.mexo_api_key.is_empty() && !self.mexo_api_secret.is_empty()
    }
}
