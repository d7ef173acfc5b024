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

//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Timestamp format used by EdgeGrid: "20240101T00:00:00+0000"
const EDGEGRID_TIMESTAMP: &str = "%Y%m%dT%H:%M:%S+0000";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into EdgeGrid timestamp: `20240101T00:00:00+0000`
///
/// The offset is always `+0000` since the input is always UTC.
pub fn format_edgegrid_timestamp(t: DateTime) -> String {
    t.format(EDGEGRID_TIMESTAMP).to_string()
}

/// Parse EdgeGrid timestamp like `20240101T00:00:00+0000` into DateTime.
pub fn parse_edgegrid_timestamp(s: &str) -> crate::Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, EDGEGRID_TIMESTAMP).map_err(|e| {
        Error::request_invalid(format!("invalid edgegrid timestamp: {s}")).with_source(e)
    })?;

    Ok(t.and_utc())
}
