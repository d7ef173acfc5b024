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

use std::fmt::{Debug, Formatter};

use edgesign_core::{utils::Redact, Error, Result, SigningCredential};

/// Credential for akamai edgegrid.
#[derive(Clone, Default)]
pub struct Credential {
    /// Client token from the API client credentials.
    pub client_token: String,
    /// Client secret from the API client credentials.
    pub client_secret: String,
    /// Access token from the API client authorizations.
    pub access_token: String,
    /// Host the credential is issued for, like `akab-xxx.luna.akamaiapis.net`.
    pub host: Option<String>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        client_token: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client_token: client_token.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
            host: None,
        }
    }

    /// Set the host this credential is issued for.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Check that every token needed for signing is present.
    ///
    /// The error never contains the secret itself.
    pub fn check(&self) -> Result<()> {
        if self.client_token.is_empty() {
            return Err(Error::credential_invalid("client_token is empty"));
        }
        if self.client_secret.is_empty() {
            return Err(Error::credential_invalid("client_secret is empty"));
        }
        if self.access_token.is_empty() {
            return Err(Error::credential_invalid("access_token is empty"));
        }
        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_token", &Redact::from(&self.client_token))
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("host", &self.host)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}
