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

//! Signing EdgeGrid API requests without effort.
//!
//! This crate glues [`edgesign_core`] together with a ready-to-use context
//! and the service signers behind feature flags.
//!
//! ```no_run
//! # async fn example() -> edgesign::Result<()> {
//! use edgesign::akamai::{default_signer, Config};
//!
//! let signer = default_signer(Config::new().with_headers_to_sign(["X-Test1"]));
//!
//! let req = http::Request::get("https://akab-xxx.luna.akamaiapis.net/papi/v1/groups")
//!     .body(bytes::Bytes::new())?;
//! let resp = signer.send(req).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use edgesign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_client};

#[cfg(feature = "akamai")]
pub mod akamai;
