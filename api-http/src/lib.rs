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

pub mod credentials;

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::HeaderMap;
use rh_satellite_core::ApiPath;
use rh_satellite_core::Empty;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::{de::DeserializeOwned, Serialize};
use std::{error::Error as StdError, future::Future, sync::Arc};
use url::Url;

#[doc(inline)]
pub use credentials::SatelliteCredentials;

pub trait HttpClient: Send + Sync {
    type Error: Send + StdError;

    /// Perform an HTTP GET request.
    fn get<T>(
        &self,
        url: Url,
        credentials: &SatelliteCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        T: DeserializeOwned + Send + Sync;

    /// Perform an HTTP POST request with a JSON body.
    fn post<B, T>(
        &self,
        url: Url,
        body: &B,
        credentials: &SatelliteCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send + Sync;

    /// Perform an HTTP PUT request with a JSON body.
    fn put<B, T>(
        &self,
        url: Url,
        body: &B,
        credentials: &SatelliteCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send + Sync;

    /// Perform an HTTP DELETE request, discarding any response body.
    fn delete(
        &self,
        url: Url,
        credentials: &SatelliteCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<Empty, Self::Error>> + Send;

    /// Perform a multipart POST carrying one file under the `content` part.
    fn post_multipart<T>(
        &self,
        url: Url,
        file_name: &str,
        content: Vec<u8>,
        credentials: &SatelliteCredentials,
        custom_headers: &HeaderMap,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        T: DeserializeOwned + Send + Sync;
}

/// HTTP-based Satellite implementation that wraps an [`HttpClient`].
///
/// This struct combines an HTTP client with the server endpoint and
/// credentials to provide a complete [`Satellite`] transport. Every request
/// is authenticated with HTTP basic auth; there is no session state and no
/// client-side caching.
///
/// # Type Parameters
///
/// * `C` - The HTTP client implementation to use
///
/// # Examples
///
/// ```rust,no_run
/// use rh_satellite_api_http::HttpSatellite;
/// use rh_satellite_api_http::SatelliteCredentials;
/// use rh_satellite_api_http::reqwest::Client;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = SatelliteCredentials::new("admin".to_string(), "changeme".to_string());
/// let http_client = Client::new()?;
/// let endpoint = Url::parse("https://satellite.example.com")?;
///
/// let satellite = HttpSatellite::new(http_client, endpoint, credentials);
/// # Ok(())
/// # }
/// ```
pub struct HttpSatellite<C: HttpClient> {
    client: C,
    endpoint: ApiEndpoint,
    credentials: SatelliteCredentials,
    custom_headers: HeaderMap,
}

impl<C: HttpClient> HttpSatellite<C> {
    /// Create a new HTTP-based Satellite transport.
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client implementation to use for requests
    /// * `endpoint` - The base URL of the Satellite server (e.g.
    ///   `https://satellite.example.com`)
    /// * `credentials` - Authentication credentials for the server
    pub fn new(client: C, endpoint: Url, credentials: SatelliteCredentials) -> Self {
        Self::with_custom_headers(client, endpoint, credentials, HeaderMap::new())
    }

    /// Create a new HTTP-based Satellite transport with custom headers.
    ///
    /// The headers are included in every request. Use this when the
    /// deployment sits behind a proxy that wants extra headers; for most use
    /// cases prefer [`HttpSatellite::new`].
    pub fn with_custom_headers(
        client: C,
        endpoint: Url,
        credentials: SatelliteCredentials,
        custom_headers: HeaderMap,
    ) -> Self {
        Self {
            client,
            endpoint: ApiEndpoint::from(endpoint),
            credentials,
            custom_headers,
        }
    }
}

/// A tagged type representing the Satellite server endpoint URL.
///
/// Provides convenient conversion methods to build request URLs from
/// [`ApiPath`] values.
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    base_url: Url,
}

impl ApiEndpoint {
    /// Create a new `ApiEndpoint` from a base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Convert a path to a full request URL
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    /// Convert a path to a full request URL with query parameters
    #[must_use]
    pub fn with_path_and_query(&self, path: &str, query: &str) -> Url {
        let mut url = self.with_path(path);
        url.set_query(Some(query));
        url
    }
}

impl From<Url> for ApiEndpoint {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl From<&ApiEndpoint> for Url {
    fn from(endpoint: &ApiEndpoint) -> Self {
        endpoint.base_url.clone()
    }
}

impl<C: HttpClient> Satellite for HttpSatellite<C>
where
    C::Error: StdError + Send + Sync,
{
    type Error = C::Error;

    async fn get<T: Sized + for<'de> serde::Deserialize<'de> + 'static + Send + Sync>(
        &self,
        path: &ApiPath,
    ) -> Result<Arc<T>, Self::Error> {
        let url = self.endpoint.with_path(path.as_str());
        self.client
            .get(url, &self.credentials, &self.custom_headers)
            .await
            .map(Arc::new)
    }

    async fn search<T: Sized + for<'de> serde::Deserialize<'de> + 'static + Send + Sync>(
        &self,
        path: &ApiPath,
        query: &SearchQuery,
    ) -> Result<Arc<T>, Self::Error> {
        let url = if query.is_empty() {
            self.endpoint.with_path(path.as_str())
        } else {
            self.endpoint
                .with_path_and_query(path.as_str(), &query.to_query_string())
        };
        self.client
            .get(url, &self.credentials, &self.custom_headers)
            .await
            .map(Arc::new)
    }

    async fn create<V: Sync + Send + Serialize, R: Sync + Send + for<'de> serde::Deserialize<'de>>(
        &self,
        path: &ApiPath,
        body: &V,
    ) -> Result<R, Self::Error> {
        let url = self.endpoint.with_path(path.as_str());
        self.client
            .post(url, body, &self.credentials, &self.custom_headers)
            .await
    }

    async fn update<V: Sync + Send + Serialize, R: Sync + Send + for<'de> serde::Deserialize<'de>>(
        &self,
        path: &ApiPath,
        body: &V,
    ) -> Result<R, Self::Error> {
        let url = self.endpoint.with_path(path.as_str());
        self.client
            .put(url, body, &self.credentials, &self.custom_headers)
            .await
    }

    async fn delete(&self, path: &ApiPath) -> Result<Empty, Self::Error> {
        let url = self.endpoint.with_path(path.as_str());
        self.client
            .delete(url, &self.credentials, &self.custom_headers)
            .await
    }

    async fn upload<R: Sync + Send + for<'de> serde::Deserialize<'de>>(
        &self,
        path: &ApiPath,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<R, Self::Error> {
        let url = self.endpoint.with_path(path.as_str());
        self.client
            .post_multipart(url, file_name, content, &self.credentials, &self.custom_headers)
            .await
    }
}
