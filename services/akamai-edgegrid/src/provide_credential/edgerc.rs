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
use edgesign_core::{Context, Error, ProvideCredential, Result};
use log::debug;

use crate::constants::*;
use crate::edgerc::{load_section, resolve_path, resolve_section};
use crate::Credential;

/// EdgercCredentialProvider loads credentials from an `.edgerc` file.
///
/// The file is an INI file with one section per API client:
///
/// ```ini
/// [default]
/// client_secret = xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx
/// host = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net/
/// access_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
/// client_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
/// ```
///
/// The path is resolved from [`Self::with_path`], `AKAMAI_EDGERC`, then
/// `~/.edgerc`. The section is resolved from [`Self::with_section`],
/// `AKAMAI_EDGERC_SECTION`, then `default`.
#[derive(Debug, Default, Clone)]
pub struct EdgercCredentialProvider {
    path: Option<String>,
    section: Option<String>,
}

impl EdgercCredentialProvider {
    /// Create a new EdgercCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the `.edgerc` file.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Set the section to load.
    pub fn with_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for EdgercCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = resolve_path(ctx, self.path.as_deref());
        let section = resolve_section(ctx, self.section.as_deref());

        let Some(mut props) = load_section(ctx, &path, &section).await? else {
            return Ok(None);
        };

        let mut take = |key: &str| {
            props.remove(key).ok_or_else(|| {
                Error::credential_invalid(format!(
                    "{key} is missing in section {section} of {path}"
                ))
            })
        };

        let client_token = take(EDGERC_CLIENT_TOKEN)?;
        let client_secret = take(EDGERC_CLIENT_SECRET)?;
        let access_token = take(EDGERC_ACCESS_TOKEN)?;
        // The host is copied from the web console with a trailing `/`.
        let host = take(EDGERC_HOST).ok().map(|v| v.replace('/', ""));

        debug!("loaded credential from section {section} of {path}");
        Ok(Some(Credential {
            client_token,
            client_secret,
            access_token,
            host,
        }))
    }
}
