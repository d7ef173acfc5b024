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
use edgesign_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider provides a fixed credential.
///
/// Use it when the credential is already known to the caller, for example
/// loaded from a secret store.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the three EdgeGrid tokens.
    pub fn new(client_token: &str, client_secret: &str, access_token: &str) -> Self {
        Self {
            credential: Credential::new(client_token, client_secret, access_token),
        }
    }

    /// Set the host the credential is issued for.
    pub fn with_host(mut self, host: &str) -> Self {
        self.credential.host = Some(host.to_string());
        self
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("token", "secret", "access");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.client_token, "token");
        assert_eq!(cred.client_secret, "secret");
        assert_eq!(cred.access_token, "access");
        assert!(cred.host.is_none());

        let provider = StaticCredentialProvider::new("token", "secret", "access")
            .with_host("akab-host.luna.akamaiapis.net");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.host.as_deref(), Some("akab-host.luna.akamaiapis.net"));
        Ok(())
    }
}
