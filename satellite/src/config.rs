// SPDX-FileCopyrightText: Copyright (c) 2026 rh-satellite contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provider configuration.
//!
//! [`ProviderConfig`] carries the connection settings as an explicit
//! struct; nothing here reads global state except [`from_env`], which
//! does so once and up front:
//!
//! - `SATELLITE_USERNAME`, `SATELLITE_PASSWORD`, `SATELLITE_HOST`
//!   (required),
//! - `SATELLITE_SSL_VERIFY` (`true`/`false`, defaults to `true`).
//!
//! [`from_env`]: ProviderConfig::from_env

#[cfg(feature = "http")]
use crate::SatelliteClient;
#[cfg(feature = "http")]
use rh_satellite_api_http::reqwest::Client;
#[cfg(feature = "http")]
use rh_satellite_api_http::reqwest::ClientParams;
#[cfg(feature = "http")]
use rh_satellite_api_http::reqwest::HttpError;
#[cfg(feature = "http")]
use rh_satellite_api_http::HttpSatellite;
#[cfg(feature = "http")]
use rh_satellite_api_http::SatelliteCredentials;
use std::env;
use std::error::Error as StdError;
use std::fmt;
#[cfg(feature = "http")]
use url::Url;

/// Connection settings for one Satellite server.
///
/// `host` is the server hostname; connections always speak HTTPS.
/// Turning `ssl_verify` off accepts self-signed certificates, which
/// Satellite installations frequently run on.
#[derive(Clone)]
pub struct ProviderConfig {
    pub username: String,
    password: String,
    pub host: String,
    pub ssl_verify: bool,
}

impl ProviderConfig {
    /// Create a configuration with SSL verification enabled.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: host.into(),
            ssl_verify: true,
        }
    }

    /// Set whether server certificates are verified.
    #[must_use]
    pub fn ssl_verify(mut self, ssl_verify: bool) -> Self {
        self.ssl_verify = ssl_verify;
        self
    }

    /// Read the configuration from the `SATELLITE_*` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when a required variable
    /// is not set and [`ConfigError::InvalidVariable`] when
    /// `SATELLITE_SSL_VERIFY` is neither `true` nor `false`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required("SATELLITE_USERNAME")?;
        let password = required("SATELLITE_PASSWORD")?;
        let host = required("SATELLITE_HOST")?;
        let ssl_verify = match env::var("SATELLITE_SSL_VERIFY") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVariable {
                name: "SATELLITE_SSL_VERIFY",
                value,
            })?,
            Err(_) => true,
        };
        Ok(Self {
            username,
            password,
            host,
            ssl_verify,
        })
    }

    /// Get password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Build a client connected to the configured server.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::InvalidHost`] when the host does not form
    /// a valid URL and [`ConnectError::Client`] when the HTTP client
    /// cannot be built.
    #[cfg(feature = "http")]
    pub fn connect(&self) -> Result<SatelliteClient<HttpSatellite<Client>>, ConnectError> {
        let endpoint = Url::parse(&format!("https://{}", self.host))
            .map_err(ConnectError::InvalidHost)?;
        let params = ClientParams::new().accept_invalid_certs(!self.ssl_verify);
        let client = Client::with_params(params)
            .map_err(HttpError::from)
            .map_err(ConnectError::Client)?;
        let credentials =
            SatelliteCredentials::new(self.username.clone(), self.password.clone());
        Ok(SatelliteClient::new(HttpSatellite::new(
            client,
            endpoint,
            credentials,
        )))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("host", &self.host)
            .field("ssl_verify", &self.ssl_verify)
            .finish()
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVariable(name))
}

/// Failure to assemble a [`ProviderConfig`] from the environment.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingVariable(&'static str),
    /// An environment variable is set to an unusable value.
    InvalidVariable { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable(name) => {
                write!(f, "environment variable {name} is not set")
            }
            Self::InvalidVariable { name, value } => {
                write!(f, "environment variable {name} has invalid value {value}")
            }
        }
    }
}

impl StdError for ConfigError {}

/// Failure to build a connected client from a [`ProviderConfig`].
#[cfg(feature = "http")]
#[derive(Debug)]
pub enum ConnectError {
    /// The configured host does not form a valid URL.
    InvalidHost(url::ParseError),
    /// The HTTP client could not be built.
    Client(HttpError),
}

#[cfg(feature = "http")]
impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHost(err) => write!(f, "invalid satellite host: {err}"),
            Self::Client(err) => write!(f, "failed to build HTTP client: {err}"),
        }
    }
}

#[cfg(feature = "http")]
impl StdError for ConnectError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidHost(err) => Some(err),
            Self::Client(err) => Some(err),
        }
    }
}
