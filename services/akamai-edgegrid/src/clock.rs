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

//! Timestamp and nonce sources for signing.

use edgesign_core::time::{format_edgegrid_timestamp, now};
use uuid::Uuid;

/// Returns the current UTC time formatted like `20240101T00:00:00+0000`.
///
/// Never cached: every call reads the wall clock.
pub fn current_timestamp() -> String {
    format_edgegrid_timestamp(now())
}

/// Returns a new random nonce rendered as a canonical UUID string.
///
/// Backed by the OS random source; a nonce must be used for one request only.
pub fn generate_nonce() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_current_timestamp_format() {
        let ts = current_timestamp();
        let bs = ts.as_bytes();

        assert_eq!(ts.len(), 22, "unexpected timestamp: {ts}");
        assert!(bs[..8].iter().all(u8::is_ascii_digit));
        assert_eq!(bs[8], b'T');
        assert!(bs[9..11].iter().all(u8::is_ascii_digit));
        assert_eq!(bs[11], b':');
        assert!(bs[12..14].iter().all(u8::is_ascii_digit));
        assert_eq!(bs[14], b':');
        assert!(bs[15..17].iter().all(u8::is_ascii_digit));
        assert!(ts.ends_with("+0000"));
    }

    #[test]
    fn test_current_timestamp_round_trips() {
        let ts = current_timestamp();
        let parsed = edgesign_core::time::parse_edgegrid_timestamp(&ts).expect("must be valid");
        assert_eq!(format_edgegrid_timestamp(parsed), ts);
    }

    #[test]
    fn test_generate_nonce_unique() {
        let nonces: HashSet<String> = (0..100).map(|_| generate_nonce()).collect();
        assert_eq!(nonces.len(), 100);
    }

    #[test]
    fn test_generate_nonce_is_uuid() {
        let nonce = generate_nonce();
        let parsed = Uuid::parse_str(&nonce).expect("nonce must be an uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.hyphenated().to_string(), nonce);
    }
}
