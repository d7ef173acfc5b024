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

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use edgesign_akamai_edgegrid::{
    make_auth_header, Config, Credential, DefaultCredentialProvider, EdgercCredentialProvider,
    RequestSigner, StaticCredentialProvider,
};
use edgesign_core::{Context, Error, HttpSend, Result, Signer, SigningRequest, StaticEnv};
use edgesign_file_read_tokio::TokioFileRead;
use http::header::AUTHORIZATION;
use http::{Request, Response, StatusCode};
use log::debug;
use pretty_assertions::assert_eq;

const HOST: &str = "akaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture_credential() -> Credential {
    Credential::new(
        "akab-client-token-xxx-xxxxxxxxxxxxxxxx",
        "SOMESECRET",
        "akab-access-token-xxx-xxxxxxxxxxxxxxxx",
    )
}

/// Parse `key=value;` pairs of an EG1 authorization header.
fn parse_auth_header(v: &str) -> HashMap<String, String> {
    let (scheme, fields) = v.split_once(' ').expect("header must have a scheme");
    assert_eq!(scheme, "EG1-HMAC-SHA256");

    fields
        .split(';')
        .filter_map(|kv| kv.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A transport that verifies the signature the way the server does.
#[derive(Debug, Clone)]
struct VerifyingHttpSend {
    credential: Credential,
    headers_to_sign: Vec<String>,
    max_body: usize,
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl HttpSend for VerifyingHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        let auth = parts
            .headers
            .remove(AUTHORIZATION)
            .ok_or_else(|| Error::request_invalid("request is not signed"))?
            .to_str()?
            .to_string();
        let fields = parse_auth_header(&auth);

        let req = SigningRequest::build(&mut parts)?;
        let expected = make_auth_header(
            &req,
            &body,
            &self.credential,
            &fields["timestamp"],
            &fields["nonce"],
            &self.headers_to_sign,
            self.max_body,
        )?;
        debug!("verifying authorization header: {auth}");

        self.seen.lock().expect("lock must be held").push(auth.clone());
        let status = if expected == auth {
            StatusCode::OK
        } else {
            StatusCode::UNAUTHORIZED
        };

        Ok(Response::builder()
            .status(status)
            .body(Bytes::from_static(b"{}"))?)
    }
}

fn verifying_context(headers_to_sign: &[&str]) -> (Context, Arc<Mutex<Vec<String>>>, Config) {
    let config = Config::new().with_headers_to_sign(headers_to_sign.iter().copied());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let ctx = Context::new().with_http_send(VerifyingHttpSend {
        credential: fixture_credential(),
        headers_to_sign: config.headers_to_sign.clone(),
        max_body: config.max_body,
        seen: seen.clone(),
    });

    (ctx, seen, config)
}

#[tokio::test]
async fn test_send_signed_request() -> Result<()> {
    init_logger();

    let (ctx, seen, config) = verifying_context(&["X-Test1", "X-Test2"]);
    let signer = Signer::new(
        ctx,
        StaticCredentialProvider::from(fixture_credential()),
        RequestSigner::new(config),
    );

    let req = Request::post(format!("https://{HOST}/testapi/v1/t3?p1=1&p2=%2F"))
        .header("X-Test1", "  spaced    value ")
        .header("X-Extra", "not signed")
        .body(Bytes::from(vec![b'd'; 4096]))?;
    let resp = signer.send(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let seen = seen.lock().expect("lock must be held");
    assert_eq!(seen.len(), 1);
    let fields = parse_auth_header(&seen[0]);
    assert_eq!(
        fields["client_token"],
        "akab-client-token-xxx-xxxxxxxxxxxxxxxx"
    );
    assert_eq!(
        fields["access_token"],
        "akab-access-token-xxx-xxxxxxxxxxxxxxxx"
    );
    assert!(!seen[0].contains("SOMESECRET"));
    assert!(!seen[0].ends_with(';'));
    Ok(())
}

#[tokio::test]
async fn test_send_resigns_every_request() -> Result<()> {
    init_logger();

    let (ctx, seen, config) = verifying_context(&[]);
    let signer = Signer::new(
        ctx,
        StaticCredentialProvider::from(fixture_credential()),
        RequestSigner::new(config),
    );

    for _ in 0..3 {
        let req = Request::get(format!("https://{HOST}/")).body(Bytes::new())?;
        let resp = signer.send(req).await?;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let seen = seen.lock().expect("lock must be held");
    let nonces: std::collections::HashSet<_> = seen
        .iter()
        .map(|v| parse_auth_header(v)["nonce"].clone())
        .collect();
    assert_eq!(nonces.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_tampered_body_fails_verification() -> Result<()> {
    init_logger();

    let (ctx, _, config) = verifying_context(&[]);
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::from(fixture_credential()),
        RequestSigner::new(config),
    );

    let mut parts = Request::put(format!("https://{HOST}/testapi/v1/t6"))
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut parts, b"PUT request").await?;

    let resp = ctx
        .http_send(Request::from_parts(
            parts,
            Bytes::from_static(b"PUT tampered"),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_sign_with_edgerc_host() -> Result<()> {
    init_logger();

    let mut f = tempfile::NamedTempFile::new()?;
    writeln!(f, "[test_edgerc]")?;
    writeln!(f, "client_secret = SOMESECRET")?;
    writeln!(f, "host = {HOST}/")?;
    writeln!(f, "access_token = akab-access-token-xxx-xxxxxxxxxxxxxxxx")?;
    writeln!(f, "client_token = akab-client-token-xxx-xxxxxxxxxxxxxxxx")?;
    writeln!(f, "max_body = 131072")?;
    let path = f.path().to_string_lossy().to_string();

    let ctx = Context::new().with_file_read(TokioFileRead);
    let config = Config::new()
        .from_edgerc(&ctx, Some(path.as_str()), Some("test_edgerc"))
        .await?;
    assert_eq!(config.max_body, 131072);

    let signer = Signer::new(
        ctx,
        EdgercCredentialProvider::new()
            .with_path(&path)
            .with_section("test_edgerc"),
        RequestSigner::new(config),
    );

    let mut parts = Request::get("/testapi/v1/t1?p1=1&p2=2")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut parts, &[]).await?;

    assert_eq!(
        parts.uri.to_string(),
        format!("https://{HOST}/testapi/v1/t1?p1=1&p2=2")
    );
    let fields = parse_auth_header(parts.headers[AUTHORIZATION].to_str()?);
    assert!(fields.contains_key("signature"));
    Ok(())
}

#[tokio::test]
async fn test_sign_without_credential() -> Result<()> {
    init_logger();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new(Config::default()),
    );

    let mut parts = Request::get(format!("https://{HOST}/"))
        .body(())?
        .into_parts()
        .0;
    let err = signer.sign(&mut parts, &[]).await.unwrap_err();
    assert!(err.is_credential_error());
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn test_sign_with_invalid_credential_keeps_request() -> Result<()> {
    init_logger();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::from(Credential::new(
            "akab-client-token-xxx-xxxxxxxxxxxxxxxx",
            "",
            "akab-access-token-xxx-xxxxxxxxxxxxxxxx",
        )),
        RequestSigner::new(Config::default()),
    );

    let mut parts = Request::get(format!("https://{HOST}/keep?me=1"))
        .header("X-Keep", "v")
        .body(())?
        .into_parts()
        .0;
    let err = signer.sign(&mut parts, &[]).await.unwrap_err();
    assert!(err.is_credential_error());
    assert_eq!(parts.uri.to_string(), format!("https://{HOST}/keep?me=1"));
    assert_eq!(parts.headers.get("x-keep").unwrap(), "v");
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}
