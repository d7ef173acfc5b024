// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use async_trait::async_trait;
use http::request::Parts;
use http::uri::{Authority, Scheme};
use http::{header, HeaderValue};
use log::debug;

use edgesign_core::hash::{base64_encode, base64_hmac_sha256, hmac_sha256};
use edgesign_core::time::{format_edgegrid_timestamp, DateTime};
use edgesign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::canonical::build_string_to_sign;
use crate::clock::{current_timestamp, generate_nonce};
use crate::constants::EG1_HMAC_SHA256;
use crate::{Config, Credential};

/// Derive the signing key of one request.
///
/// The key is `base64(HMAC-SHA256(key = client_secret, message = timestamp))`,
/// so it only lives as long as the timestamp is accepted.
pub fn derive_signing_key(timestamp: &str, client_secret: &str) -> String {
    base64_encode(&hmac_sha256(
        client_secret.as_bytes(),
        timestamp.as_bytes(),
    ))
}

/// Build the complete `Authorization` header value for a request.
///
/// This is a pure function of its inputs: the caller supplies timestamp and
/// nonce, which must be fresh for every request that goes on the wire.
///
/// ```text
/// EG1-HMAC-SHA256 client_token=<t>;access_token=<a>;timestamp=<ts>;nonce=<n>;signature=<sig>
/// ```
pub fn make_auth_header(
    req: &SigningRequest,
    body: &[u8],
    cred: &Credential,
    timestamp: &str,
    nonce: &str,
    headers_to_sign: &[String],
    max_body: usize,
) -> Result<String> {
    cred.check()?;

    let unsigned_auth_header = format!(
        "{EG1_HMAC_SHA256} client_token={};access_token={};timestamp={timestamp};nonce={nonce};",
        cred.client_token, cred.access_token,
    );
    debug!("unsigned authorization header: {unsigned_auth_header}");

    let string_to_sign =
        build_string_to_sign(req, body, headers_to_sign, max_body, &unsigned_auth_header);

    let signing_key = derive_signing_key(timestamp, &cred.client_secret);
    let signature = base64_hmac_sha256(signing_key.as_bytes(), &string_to_sign);

    Ok(format!("{unsigned_auth_header}signature={signature}"))
}

/// RequestSigner that implements EdgeGrid EG1-HMAC-SHA256.
///
/// - [Authenticate with EdgeGrid](https://techdocs.akamai.com/developer/docs/authenticate-with-edgegrid)
#[derive(Debug)]
pub struct RequestSigner {
    config: Config,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer with given config.
    pub fn new(config: Config) -> Self {
        Self {
            config,

            time: None,
            nonce: None,
        }
    }

    /// Get the config used by this signer.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A nonce must never be reused across requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available to sign the request",
            ));
        };
        cred.check()?;

        // Point relative requests at the host the credential is issued for.
        let original_uri = req.uri.clone();
        if req.uri.authority().is_none() {
            if let Some(host) = cred.host.as_deref() {
                req.uri = with_credential_host(&req.uri, host)?;
            }
        }

        let mut signed_req = match SigningRequest::build(req) {
            Ok(signed_req) => signed_req,
            Err(err) => {
                req.uri = original_uri;
                return Err(err);
            }
        };

        // The parts are handed back whether or not signing succeeds.
        let signed = self.authorization(&signed_req, body, cred);
        if let Ok(value) = &signed {
            signed_req.headers.insert(header::AUTHORIZATION, value.clone());
        }
        signed_req.apply(req)?;

        if signed.is_err() {
            req.uri = original_uri;
        }
        signed.map(|_| ())
    }
}

impl RequestSigner {
    fn authorization(
        &self,
        req: &SigningRequest,
        body: &[u8],
        cred: &Credential,
    ) -> Result<HeaderValue> {
        let timestamp = match self.time {
            Some(t) => format_edgegrid_timestamp(t),
            None => current_timestamp(),
        };
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);

        let auth = make_auth_header(
            req,
            body,
            cred,
            &timestamp,
            &nonce,
            &self.config.headers_to_sign,
            self.config.max_body,
        )?;

        let mut value = HeaderValue::from_str(&auth).map_err(|e| {
            Error::unexpected("failed to create authorization header").with_source(e)
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Returns `uri` rebased onto `https://<host>`.
fn with_credential_host(uri: &http::Uri, host: &str) -> Result<http::Uri> {
    let mut parts = uri.clone().into_parts();
    parts.scheme = Some(Scheme::HTTPS);
    parts.authority = Some(Authority::try_from(host).map_err(|e| {
        Error::credential_invalid(format!("credential host {host} is invalid")).with_source(e)
    })?);
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(http::uri::PathAndQuery::from_static("/"));
    }
    Ok(http::Uri::from_parts(parts)?)
}
