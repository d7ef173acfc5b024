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

use edgesign_core::{Context, OsEnv};
use edgesign_file_read_tokio::TokioFileRead;
use edgesign_http_send_reqwest::ReqwestHttpSend;

/// Create a context with the default implementations.
///
/// - files are read with [`TokioFileRead`]
/// - requests are sent with [`ReqwestHttpSend`] on a default `reqwest::Client`
/// - env vars and the home dir come from [`OsEnv`]
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a default context that sends requests with the given client.
pub fn default_context_with_client(client: reqwest::Client) -> Context {
    default_context().with_http_send(ReqwestHttpSend::new(client))
}
