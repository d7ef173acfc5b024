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
use log::debug;

use crate::constants::*;
use crate::edgerc::resolve_section;
use crate::Credential;

/// EnvCredentialProvider loads EdgeGrid credentials from environment variables.
///
/// For the `default` section this provider looks for:
///
/// - `AKAMAI_CLIENT_TOKEN`
/// - `AKAMAI_CLIENT_SECRET`
/// - `AKAMAI_ACCESS_TOKEN`
/// - `AKAMAI_HOST` (optional)
///
/// For any other section the section name is inserted in upper case, like
/// `AKAMAI_PAPI_CLIENT_TOKEN` for section `papi`. The section defaults to
/// `AKAMAI_EDGERC_SECTION` and then `default`.
///
/// The three tokens must all be present, otherwise nothing is loaded.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {
    section: Option<String>,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section used to build the env names.
    pub fn with_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }
}

/// Turn `AKAMAI_CLIENT_TOKEN` into `AKAMAI_<SECTION>_CLIENT_TOKEN`.
fn sectioned(name: &str, section: &str) -> String {
    if section == DEFAULT_SECTION {
        return name.to_string();
    }

    let suffix = name.trim_start_matches("AKAMAI_");
    format!("AKAMAI_{}_{suffix}", section.to_uppercase())
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let section = resolve_section(ctx, self.section.as_deref());
        let envs = ctx.env_vars();

        let client_token = envs.get(&sectioned(AKAMAI_CLIENT_TOKEN, &section));
        let client_secret = envs.get(&sectioned(AKAMAI_CLIENT_SECRET, &section));
        let access_token = envs.get(&sectioned(AKAMAI_ACCESS_TOKEN, &section));

        match (client_token, client_secret, access_token) {
            (Some(ct), Some(cs), Some(at)) => Ok(Some(Credential {
                client_token: ct.clone(),
                client_secret: cs.clone(),
                access_token: at.clone(),
                host: envs
                    .get(&sectioned(AKAMAI_HOST, &section))
                    .map(|v| v.replace('/', "")),
            })),
            _ => {
                debug!("credential for section {section} is not complete in env");
                Ok(None)
            }
        }
    }
}
