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

use edgesign_core::{Context, Error, Result};
use log::debug;

use crate::constants::*;
use crate::edgerc;

/// Config carries all the signing configuration for akamai edgegrid.
///
/// Both values are provided by the individual APIs being called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Names of the headers that will be signed, in order.
    ///
    /// Default to empty.
    pub headers_to_sign: Vec<String>,
    /// Maximum number of body bytes covered by the content hash.
    ///
    /// `max_body` will be loaded from
    ///
    /// - this field, default to [`DEFAULT_MAX_BODY`]
    /// - env value: [`AKAMAI_MAX_BODY`] via [`Config::from_env`]
    /// - `max_body` in `.edgerc` via [`Config::from_edgerc`]
    pub max_body: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headers_to_sign: Vec::new(),
            max_body: DEFAULT_MAX_BODY,
        }
    }
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headers_to_sign
    pub fn with_headers_to_sign<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers_to_sign = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Set max_body
    pub fn with_max_body(mut self, max_body: usize) -> Self {
        self.max_body = max_body;
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(AKAMAI_MAX_BODY) {
            self.max_body = parse_max_body(&v)?;
        }

        Ok(self)
    }

    /// Load config from the `.edgerc` file.
    ///
    /// `path` and `section` fall back to `AKAMAI_EDGERC`, `AKAMAI_EDGERC_SECTION`
    /// and finally `~/.edgerc` and `default`. A missing file or section leaves
    /// the config unchanged.
    pub async fn from_edgerc(
        mut self,
        ctx: &Context,
        path: Option<&str>,
        section: Option<&str>,
    ) -> Result<Self> {
        let path = edgerc::resolve_path(ctx, path);
        let section = edgerc::resolve_section(ctx, section);

        let Some(props) = edgerc::load_section(ctx, &path, &section).await? else {
            return Ok(self);
        };

        if let Some(v) = props.get(EDGERC_MAX_BODY) {
            self.max_body = parse_max_body(v)?;
            debug!("loaded max_body {} from edgerc section {section}", self.max_body);
        }

        Ok(self)
    }
}

fn parse_max_body(v: &str) -> Result<usize> {
    v.trim().parse().map_err(|e| {
        Error::config_invalid(format!("max_body must be a non-negative integer, got {v}"))
            .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgesign_core::StaticEnv;
    use edgesign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_ctx(envs: &[(&str, &str)]) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: envs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>(),
            })
    }

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert!(cfg.headers_to_sign.is_empty());
        assert_eq!(cfg.max_body, 2048);
    }

    #[test]
    fn test_builder() {
        let cfg = Config::new()
            .with_headers_to_sign(["X-Test1", "X-Test2"])
            .with_max_body(10);
        assert_eq!(cfg.headers_to_sign, vec!["X-Test1", "X-Test2"]);
        assert_eq!(cfg.max_body, 10);
    }

    #[test]
    fn test_from_env() -> Result<()> {
        let cfg = Config::default().from_env(&env_ctx(&[(AKAMAI_MAX_BODY, "4096")]))?;
        assert_eq!(cfg.max_body, 4096);

        let err = Config::default()
            .from_env(&env_ctx(&[(AKAMAI_MAX_BODY, "lots")]))
            .unwrap_err();
        assert_eq!(err.kind(), edgesign_core::ErrorKind::ConfigInvalid);
        Ok(())
    }

    #[tokio::test]
    async fn test_from_edgerc() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        writeln!(f, "[default]\nmax_body = 131072\n\n[papi]\nmax_body = 1024")?;
        let path = f.path().to_string_lossy().to_string();

        let ctx = env_ctx(&[]);
        let cfg = Config::default().from_edgerc(&ctx, Some(path.as_str()), None).await?;
        assert_eq!(cfg.max_body, 131072);

        let cfg = Config::default()
            .from_edgerc(&ctx, Some(path.as_str()), Some("papi"))
            .await?;
        assert_eq!(cfg.max_body, 1024);

        let ctx = env_ctx(&[(AKAMAI_EDGERC, path.as_str()), (AKAMAI_EDGERC_SECTION, "papi")]);
        let cfg = Config::default().from_edgerc(&ctx, None, None).await?;
        assert_eq!(cfg.max_body, 1024);

        let cfg = Config::default()
            .from_edgerc(&ctx, Some("/not/exist/.edgerc"), None)
            .await?;
        assert_eq!(cfg, Config::default());
        Ok(())
    }
}
