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

use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads the credential through the provider (caching it until it becomes
/// invalid) and delegates the actual signing to the request signer. Every call
/// to [`Signer::sign`] or [`Signer::send`] signs the request from scratch.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    signer: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        signer: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            provider: Arc::new(provider),
            signer: Arc::new(signer),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Replace the context used by this signer.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Replace the credential provider.
    ///
    /// The cached credential is dropped so that the next request loads from
    /// the new provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    async fn load_credential(&self) -> Result<Option<K>> {
        let credential = self
            .credential
            .lock()
            .map_err(|_| Error::unexpected("credential cache lock poisoned"))?
            .clone();
        if credential.is_valid() {
            return Ok(credential);
        }

        let credential = self.provider.provide_credential(&self.ctx).await?;
        *self
            .credential
            .lock()
            .map_err(|_| Error::unexpected("credential cache lock poisoned"))? = credential.clone();
        Ok(credential)
    }

    /// Signing request.
    ///
    /// `body` must be the exact payload that will be sent along with `req`.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let credential = self.load_credential().await?;

        self.signer
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }

    /// Sign the request and dispatch it with the context's [`HttpSend`](crate::HttpSend).
    ///
    /// Retrying a request must go through this method again so that it's
    /// signed freshly; a signed request must never be replayed.
    pub async fn send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts, &body).await?;

        self.ctx
            .http_send(http::Request::from_parts(parts, body))
            .await
    }
}
