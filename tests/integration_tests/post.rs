use crate::common::test_context::{echo_authentication_header, ok_envelope, TestContext};
use serde::Serialize;
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header_exists, method, path},
    Mock,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildOrderRequest<'a> {
    market_id: &'a str,
    side: &'a str,
    order_type: &'a str,
    price: &'a str,
    amount: &'a str,
}

#[tokio::test]
async fn post_sends_json_body_and_returns_payload() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/build"))
        .and(header_exists("Hydro-Authentication"))
        .and(body_json(json!({
            "marketId": "HOT-WETH",
            "side": "buy",
            "orderType": "limit",
            "price": "0.01",
            "amount": "100"
        })))
        .respond_with(ok_envelope(json!({ "order": { "id": "0xorder" } })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let data: Value = ctx
        .client
        .post(
            "orders/build",
            &BuildOrderRequest {
                market_id: "HOT-WETH",
                side: "buy",
                order_type: "limit",
                price: "0.01",
                amount: "100",
            },
        )
        .await
        .unwrap();

    assert_eq!(data["order"]["id"], "0xorder");
}

#[tokio::test]
async fn post_is_always_signed() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .respond_with(echo_authentication_header)
        .mount(&ctx.mock_server)
        .await;

    let header: Option<String> = ctx.client.post("orders", &json!({})).await.unwrap();

    assert!(header.is_some());
    assert_eq!(ctx.signer.messages().len(), 1);
}
