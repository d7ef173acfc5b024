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

use anyhow::Result;
use bytes::Bytes;
use edgesign_akamai_edgegrid::{Config, DefaultCredentialProvider, RequestSigner};
use edgesign_core::{Context, OsEnv, Signer};
use edgesign_file_read_tokio::TokioFileRead;
use edgesign_http_send_reqwest::ReqwestHttpSend;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::new().from_env(&ctx)?.from_edgerc(&ctx, None, None).await?;
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new(config),
    );

    // A relative URI is sent to the host of the loaded credential.
    let req = http::Request::get("/identity-management/v3/user-profile").body(Bytes::new())?;
    let resp = signer.send(req).await?;

    info!("got response with status {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
