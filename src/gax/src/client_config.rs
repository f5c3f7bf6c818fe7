// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::error::Error;
use crate::request::WireRequest;
use http::Uri;
use std::str::FromStr;

/// The region used when neither the request nor the configuration set one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configure a client.
///
/// A client needs a region to select the service endpoint. The defaults
/// should work for most applications. But some applications may need to
/// override the default region, the endpoint (e.g. to use a local emulator),
/// or enable tracing.
///
/// The configuration can also be loaded from a document:
///
/// ```
/// # use awsclient_gax::client_config::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(r#"{"region": "eu-west-1", "tracing": true}"#)?;
/// assert_eq!(config.region(), "eu-west-1");
/// assert!(config.tracing_enabled());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClientConfig {
    region: Option<String>,
    endpoint: Option<String>,
    tracing: bool,
}

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// The default region for requests without a region override.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Sets the default region.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets an endpoint that overrides the endpoint computed from the region.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    pub fn tracing_enabled(&self) -> bool {
        self.tracing
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// Calculates the endpoint for `request`.
    ///
    /// The `endpoint_prefix` is the service prefix in the endpoint host, e.g.
    /// `cognito-idp` or `ssm`.
    ///
    /// An endpoint override always wins. Otherwise the host is computed from
    /// the region override of the request, or the default region of this
    /// configuration.
    pub fn endpoint(&self, endpoint_prefix: &str, request: &WireRequest) -> Result<Uri> {
        if let Some(endpoint) = &self.endpoint {
            let uri = Uri::from_str(endpoint).map_err(Error::configuration)?;
            if uri.authority().is_none() {
                return Err(Error::configuration(format!(
                    "missing authority in endpoint {endpoint}"
                )));
            }
            return Ok(uri);
        }
        let region = request.region.as_deref().unwrap_or(self.region());
        let domain = if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let endpoint = format!("https://{endpoint_prefix}.{region}.{domain}");
        if self.tracing_enabled() {
            tracing::debug!(endpoint = %endpoint, "resolved endpoint");
        }
        Uri::from_str(&endpoint).map_err(Error::configuration)
    }
}
