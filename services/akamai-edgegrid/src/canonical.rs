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

//! Canonical request construction for EG1-HMAC-SHA256.
//!
//! Header values may carry opaque non-ASCII bytes, so the canonical forms
//! are built as bytes and signed exactly as they appear on the wire.

use edgesign_core::hash::base64_sha256;
use edgesign_core::utils::escape_tabs;
use edgesign_core::SigningRequest;
use http::{HeaderMap, Method};
use log::debug;

/// Returns the headers in `headers_to_sign` in normalized form.
///
/// Every listed header that is present on the request (case-insensitively)
/// becomes `name:value` with a lowercased name and a value whose surrounding
/// whitespace is trimmed and whose inner whitespace runs are collapsed to a
/// single space. Entries keep the order of `headers_to_sign` and are joined
/// by tabs. Absent headers are skipped.
pub fn canonicalize_headers(headers: &HeaderMap, headers_to_sign: &[String]) -> Vec<u8> {
    let mut bs = Vec::new();

    for name in headers_to_sign {
        let Some(value) = SigningRequest::header_value_joined(headers, name) else {
            continue;
        };

        if !bs.is_empty() {
            bs.push(b'\t');
        }
        bs.extend_from_slice(name.to_lowercase().as_bytes());
        bs.push(b':');
        let words = value
            .split(|b| b.is_ascii_whitespace())
            .filter(|w| !w.is_empty());
        for (idx, word) in words.enumerate() {
            if idx != 0 {
                bs.push(b' ');
            }
            bs.extend_from_slice(word);
        }
    }

    bs
}

/// Returns true if requests with this method carry a body that is covered by
/// the content hash.
pub fn is_body_bearing(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Returns the base64 encoded SHA256 of the request body.
///
/// Only the first `max_body` bytes are hashed. Returns an empty string for
/// methods without a body or an empty body.
pub fn content_hash(method: &Method, body: &[u8], max_body: usize) -> String {
    if !is_body_bearing(method) || body.is_empty() {
        return String::new();
    }

    let body = if body.len() > max_body {
        debug!(
            "data length {} is larger than maximum {max_body}, truncated for computing the hash",
            body.len()
        );
        &body[..max_body]
    } else {
        body
    };

    base64_sha256(body)
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// METHOD + "\t" +
/// scheme + "\t" +
/// host + "\t" +
/// path and query + "\t" +
/// canonicalized headers + "\t" +
/// content hash + "\t" +
/// unsigned authorization header
/// ```
pub fn build_string_to_sign(
    req: &SigningRequest,
    body: &[u8],
    headers_to_sign: &[String],
    max_body: usize,
    unsigned_auth_header: &str,
) -> Vec<u8> {
    let method = req.method.as_str().to_ascii_uppercase();
    let headers = canonicalize_headers(&req.headers, headers_to_sign);
    let hash = content_hash(&req.method, body, max_body);

    let fields: [&[u8]; 7] = [
        method.as_bytes(),
        req.scheme.as_str().as_bytes(),
        req.host(),
        req.path_and_query.as_str().as_bytes(),
        &headers,
        hash.as_bytes(),
        unsigned_auth_header.as_bytes(),
    ];
    let bs = fields.join(&b'\t');

    debug!(
        "string to sign: {}",
        escape_tabs(&String::from_utf8_lossy(&bs))
    );
    bs
}
