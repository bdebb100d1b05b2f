// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::env;

use thiserror::Error;

/// Failure modes for talking to the board provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// The provider answered 200 but the payload carried an error object.
    #[error("provider error: {0}")]
    Provider(String),
    /// The request never completed (DNS, TLS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body did not decode into the expected shape.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Configuration problems surfaced before any request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),
}

const API_URL_VAR: &str = "MONDAY_API_URL";
const API_TOKEN_VAR: &str = "MONDAY_API_TOKEN";

/// Connection settings for the board provider, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the provider's API endpoint.
    pub api_url: String,
    /// Bearer token presented on every request.
    pub api_token: String,
}

impl ProviderConfig {
    /// Read the provider endpoint and token from `MONDAY_API_URL` and
    /// `MONDAY_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that is
    /// missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that is
    /// missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let api_url = read_var(&lookup, API_URL_VAR)?;
        let api_token = read_var(&lookup, API_TOKEN_VAR)?;
        Ok(Self { api_url, api_token })
    }
}

fn read_var<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let value = lookup(name).ok_or(ConfigError::MissingVar(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVar(name));
    }
    Ok(value)
}
