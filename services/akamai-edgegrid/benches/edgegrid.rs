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

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use edgesign_akamai_edgegrid::{make_auth_header, Config, Credential, RequestSigner};
use edgesign_core::{Context, SignRequest, SigningRequest};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("akamai_edgegrid");

    let cred = Credential::new(
        "akab-client-token-xxx-xxxxxxxxxxxxxxxx",
        "SOMESECRET",
        "akab-access-token-xxx-xxxxxxxxxxxxxxxx",
    );
    let headers_to_sign = vec!["X-Test1".to_string(), "X-Test2".to_string()];
    let body = vec![b'd'; 4096];

    group.bench_function("make_auth_header", |b| {
        let mut parts = http::Request::post("https://example.com/testapi/v1/t3?p1=1")
            .header("X-Test1", "  first-thing   second-thing ")
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0;
        let req = SigningRequest::build(&mut parts).expect("request must be valid");

        b.iter(|| {
            make_auth_header(
                &req,
                &body,
                &cred,
                "20140321T19:34:21+0000",
                "nonce-xx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
                &headers_to_sign,
                2048,
            )
            .expect("must success")
        })
    });

    group.bench_function("sign_request", |b| {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("must success");

        let s = RequestSigner::new(Config::new().with_headers_to_sign(headers_to_sign.clone()));
        let ctx = Context::new();

        b.to_async(&runtime).iter(|| async {
            let (mut parts, _) = http::Request::post("https://example.com/testapi/v1/t3")
                .header("X-Test1", "value")
                .body(())
                .expect("request must be valid")
                .into_parts();
            s.sign_request(&ctx, &mut parts, &body, Some(&cred))
                .await
                .expect("must success")
        })
    });

    group.finish();
}
