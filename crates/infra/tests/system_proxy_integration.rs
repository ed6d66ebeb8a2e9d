//! Proxy selection from the environment.
//!
//! Lives in its own test binary: it sets `HTTP_PROXY` for the whole process
//! before any client is built.

use nfsnapi_infra::{ClientConfig, Credentials, RequestRunner};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn default_runner_honors_environment_proxy_and_opt_out_bypasses_it() {
    let proxy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/ABCD-1234/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("10.56"))
        .expect(1)
        .mount(&proxy)
        .await;

    std::env::set_var("HTTP_PROXY", proxy.uri());
    std::env::remove_var("NO_PROXY");
    std::env::remove_var("no_proxy");

    let credentials = Credentials::new("testuser", "p3kxmRKf9dk3l6ls");
    let base_url = "http://api.example.invalid".to_string();

    let proxied =
        RequestRunner::new(ClientConfig { base_url: base_url.clone(), ..Default::default() })
            .expect("runner");
    let balance = proxied.get(&credentials, "/account/ABCD-1234/balance").await.unwrap();
    assert_eq!(balance, "10.56");

    // Direct connection: `.invalid` never resolves, and the proxy sees nothing.
    let direct = RequestRunner::new(ClientConfig {
        base_url,
        use_system_proxy: false,
        ..Default::default()
    })
    .expect("runner");
    let err = direct.get(&credentials, "/account/ABCD-1234/balance").await.unwrap_err();
    assert!(err.debug().is_none());

    assert_eq!(proxy.received_requests().await.unwrap().len(), 1);
}
