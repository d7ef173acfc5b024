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

//! Akamai EdgeGrid support with convenience APIs.

pub use edgesign_akamai_edgegrid::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default EdgeGrid signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default EdgeGrid signer.
///
/// This function creates a signer with:
///
/// - the default context (tokio file reader, reqwest client, OS environment)
/// - [`DefaultCredentialProvider`], which reads env vars and then `~/.edgerc`
/// - [`RequestSigner`] with the given config
///
/// # Example
///
/// ```no_run
/// # async fn example() -> edgesign::Result<()> {
/// use edgesign::akamai::{default_signer, Config, StaticCredentialProvider};
///
/// let signer = default_signer(Config::default()).with_credential_provider(
///     StaticCredentialProvider::new("client-token", "client-secret", "access-token"),
/// );
///
/// let mut parts = http::Request::get("https://akab-xxx.luna.akamaiapis.net/ccu/v3/queues")
///     .body(())?
///     .into_parts()
///     .0;
/// signer.sign(&mut parts, &[]).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(config: Config) -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new(config);
    Signer::new(ctx, provider, signer)
}
