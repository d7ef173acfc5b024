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

//! Loading sections of the `.edgerc` INI file.

use std::collections::HashMap;

use edgesign_core::{Context, Error, Result};
use ini::Ini;
use log::debug;

use crate::constants::*;

/// Resolve the `.edgerc` path.
///
/// Resolution order: the given path, `AKAMAI_EDGERC`, then `~/.edgerc`.
pub(crate) fn resolve_path(ctx: &Context, path: Option<&str>) -> String {
    path.map(|v| v.to_string())
        .or_else(|| ctx.env_var(AKAMAI_EDGERC))
        .unwrap_or_else(|| DEFAULT_EDGERC_PATH.to_string())
}

/// Resolve the section name.
///
/// Resolution order: the given section, `AKAMAI_EDGERC_SECTION`, then `default`.
pub(crate) fn resolve_section(ctx: &Context, section: Option<&str>) -> String {
    section
        .map(|v| v.to_string())
        .or_else(|| ctx.env_var(AKAMAI_EDGERC_SECTION))
        .unwrap_or_else(|| DEFAULT_SECTION.to_string())
}

/// Load all key-value pairs of a section.
///
/// - Returns `Ok(None)` if the file can't be read or the section doesn't exist.
/// - Returns an error if the file exists but can't be parsed.
pub(crate) async fn load_section(
    ctx: &Context,
    path: &str,
    section: &str,
) -> Result<Option<HashMap<String, String>>> {
    let Some(expanded_path) = ctx.expand_home_dir(path) else {
        debug!("failed to expand homedir for path: {path}");
        return Ok(None);
    };

    let content = match ctx.file_read(&expanded_path).await {
        Ok(content) => content,
        Err(err) => {
            debug!("failed to read edgerc file {expanded_path}: {err}");
            return Ok(None);
        }
    };

    let conf = Ini::load_from_str(&String::from_utf8_lossy(&content)).map_err(|e| {
        Error::config_invalid(format!("failed to parse edgerc file {expanded_path}"))
            .with_source(e)
    })?;

    let Some(props) = conf.section(Some(section)) else {
        debug!("section {section} not found in edgerc file {expanded_path}");
        return Ok(None);
    };

    Ok(Some(
        props
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    ))
}
