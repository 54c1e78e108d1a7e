// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the AWS check service
//!
//! Loads configuration once from environment variables; nothing is re-read
//! per request.

use axum::http::Uri;
use secrecy::SecretString;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    /// Listening address. Not configurable.
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const REGION: &str = "AWS_DEFAULT_REGION";
    pub const ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";
    pub const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
    pub const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
}

/// Explicit key pair, used instead of the SDK credential chain
#[derive(Debug)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

/// Application-wide configuration
#[derive(Debug)]
pub struct Config {
    pub server_addr: String,
    /// `None` leaves region discovery to the SDK default chain
    pub region: Option<String>,
    /// Redirects every provider call, e.g. to LocalStack
    pub endpoint_url: Option<String>,
    pub credentials: Option<StaticCredentials>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            region: None,
            endpoint_url: None,
            credentials: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let credentials = match (var(env_vars::ACCESS_KEY_ID), var(env_vars::SECRET_ACCESS_KEY)) {
            (Some(access_key_id), Some(secret)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key: SecretString::new(secret.into()),
            }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "Only one of {} / {} is set, falling back to the default credential chain",
                    env_vars::ACCESS_KEY_ID,
                    env_vars::SECRET_ACCESS_KEY
                );
                None
            }
        };

        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            region: var(env_vars::REGION),
            endpoint_url: var(env_vars::ENDPOINT_URL),
            credentials,
        }
    }

    /// Validates configuration before any client is built
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for a malformed region or endpoint override.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            validate_region(region)?;
        }
        if let Some(endpoint) = &self.endpoint_url {
            validate_endpoint(endpoint)?;
        }
        Ok(())
    }
}

fn validate_region(region: &str) -> Result<()> {
    let well_formed = !region.is_empty()
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !well_formed {
        return Err(AppError::Config(format!(
            "Invalid region '{}': expected something like 'us-east-1'",
            region
        )));
    }
    Ok(())
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let uri: Uri = endpoint.parse().map_err(|e| {
        AppError::Config(format!("Invalid endpoint override '{}': {}", endpoint, e))
    })?;

    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => {
            return Err(AppError::Config(format!(
                "Invalid endpoint override '{}': expected an http:// or https:// URL",
                endpoint
            )));
        }
    }

    if uri.host().is_none_or(str::is_empty) {
        return Err(AppError::Config(format!(
            "Invalid endpoint override '{}': missing host",
            endpoint
        )));
    }

    Ok(())
}
