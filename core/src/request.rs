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

use std::mem;

use http::header::HOST;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Signing context for request.
///
/// The path and query are kept exactly as they appear on the wire, signers
/// must not re-encode them.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path and query in request-URI form.
    pub path_and_query: PathAndQuery,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// On error `parts` is left untouched.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        if parts.uri.authority().is_none() {
            return Err(Error::request_invalid(
                "request without authority is invalid for signing",
            ));
        }

        let uri = mem::take(&mut parts.uri).into_parts();
        let Some(authority) = uri.authority else {
            return Err(Error::unexpected("authority disappeared from uri"));
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority,
            path_and_query: uri
                .path_and_query
                .unwrap_or_else(|| PathAndQuery::from_static("/")),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = Some(self.path_and_query);
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the host that the request will be served by.
    ///
    /// An explicit `Host` header wins over the host part of the authority. The
    /// port of the authority is never included. Header bytes are returned as
    /// they are on the wire.
    pub fn host(&self) -> &[u8] {
        match self.headers.get(HOST) {
            Some(v) => v.as_bytes(),
            None => self.authority.host().as_bytes(),
        }
    }

    /// Get all values of the header with given name joined by `", "`.
    ///
    /// The name is matched case-insensitively. Values are kept as raw bytes,
    /// including non-ASCII ones. Returns `None` if the header is absent or the
    /// name is not a valid header name.
    pub fn header_value_joined(headers: &HeaderMap, name: &str) -> Option<Vec<u8>> {
        let mut values = headers.get_all(name).iter().peekable();
        values.peek()?;

        let mut bs = Vec::new();
        for (idx, v) in values.enumerate() {
            if idx != 0 {
                bs.extend_from_slice(b", ");
            }
            bs.extend_from_slice(v.as_bytes());
        }

        Some(bs)
    }
}
