use crate::common::test_context::{echo_authentication_header, ok_envelope, TestContext};
use serde_json::Value;
use wiremock::{
    matchers::{header_exists, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn delete_returns_unit_for_empty_payload() {
    let ctx = TestContext::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/orders/0xorder"))
        .and(header_exists("Hydro-Authentication"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 0,
            "desc": "success"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let _: () = ctx.client.delete("orders/0xorder").await.unwrap();
}

#[tokio::test]
async fn delete_is_always_signed() {
    let ctx = TestContext::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/orders/0xorder"))
        .respond_with(echo_authentication_header)
        .mount(&ctx.mock_server)
        .await;

    let header: Option<String> = ctx.client.delete("orders/0xorder").await.unwrap();

    assert!(header.is_some());
    assert_eq!(ctx.signer.messages().len(), 1);
}

#[tokio::test]
async fn delete_can_return_payload() {
    let ctx = TestContext::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/orders"))
        .respond_with(ok_envelope(serde_json::json!({ "cancelled": 3 })))
        .mount(&ctx.mock_server)
        .await;

    let data: Value = ctx.client.delete("orders").await.unwrap();

    assert_eq!(data["cancelled"], 3);
}
