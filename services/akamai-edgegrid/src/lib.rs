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

//! Akamai EdgeGrid signing implementation for edgesign.
//!
//! This crate implements the `EG1-HMAC-SHA256` scheme used by Akamai
//! `{OPEN}` APIs. Every request is signed with a fresh timestamp and nonce,
//! and the resulting value is attached as the `Authorization` header.
//!
//! ## Quick Start
//!
//! ```no_run
//! use edgesign_akamai_edgegrid::{Config, DefaultCredentialProvider, RequestSigner};
//! use edgesign_core::{Context, OsEnv, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = Config::new()
//!     .with_headers_to_sign(["X-Test1"])
//!     .from_env(&ctx)?;
//!
//! let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new(config));
//!
//! let mut parts = http::Request::get("https://akab-xxx.luna.akamaiapis.net/papi/v1/contracts")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, &[]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! - [`StaticCredentialProvider`]: credentials known by the caller
//! - [`EnvCredentialProvider`]: `AKAMAI_CLIENT_TOKEN` and friends
//! - [`EdgercCredentialProvider`]: sections of an `.edgerc` file
//! - [`DefaultCredentialProvider`]: env, then `.edgerc`
//!
//! ## Signing Without a Signer
//!
//! [`make_auth_header`] is a pure function of the request, the credential, the
//! timestamp and the nonce. It's useful to reproduce a signature, or to sign
//! through a transport that isn't driven by [`edgesign_core::Signer`].

#![warn(missing_docs)]

mod constants;
pub use constants::DEFAULT_MAX_BODY;
pub use constants::EG1_HMAC_SHA256;

mod canonical;
pub use canonical::build_string_to_sign;
pub use canonical::canonicalize_headers;
pub use canonical::content_hash;
pub use canonical::is_body_bearing;

mod clock;
pub use clock::current_timestamp;
pub use clock::generate_nonce;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod edgerc;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::derive_signing_key;
pub use sign_request::make_auth_header;
pub use sign_request::RequestSigner;
