use enso_finance_mcp::{
    enso::EnsoClient,
    request::{ApiRequest, Endpoint},
    tools::{
        actions::GetActionsTool, bundle::PostBundleInfoTool, prices::GetTokenPricesTool,
        quote::GetShortcutRouteTool, route::PostSwapTokensTool, tokens::GetTokensInfoTool,
        wallet::GetWalletBalancesTool, Tool, ToolRegistry,
    },
    EnsoError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

async fn setup() -> (MockServer, EnsoClient) {
    let server = MockServer::start().await;
    let client = EnsoClient::new(&server.uri(), Some(TOKEN.into())).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_get_actions_sends_auth_headers() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"action": "swap"}])))
        .expect(1)
        .mount(&server)
        .await;

    let result = GetActionsTool.call(&client, json!({})).await.unwrap();
    assert_eq!(result, json!([{"action": "swap"}]));
}

#[tokio::test]
async fn test_explicit_token_overrides_configured_one() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .and(header("authorization", "Bearer per-call"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    GetActionsTool
        .call(&client, json!({"api_token": "per-call"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_wallet_balances_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balances"))
        .and(query_param("chainId", "1"))
        .and(query_param("eoaAddress", VITALIK))
        .and(query_param("useEoa", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"token": "0x01", "amount": "5"}])))
        .expect(1)
        .mount(&server)
        .await;

    let result = GetWalletBalancesTool
        .call(&client, json!({"chain_id": 1, "eoa_address": VITALIK}))
        .await
        .unwrap();
    assert_eq!(result[0]["amount"], "5");
}

#[tokio::test]
async fn test_tokens_info_joins_underlying_tokens() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/tokens"))
        .and(query_param("underlyingTokens", "0xAA,0xBB"))
        .and(query_param("perPage", "100"))
        .and(query_param_is_missing("protocolSlug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {}})))
        .expect(1)
        .mount(&server)
        .await;

    GetTokensInfoTool
        .call(&client, json!({"chain_id": 1, "underlying_tokens": ["0xAA", "0xBB"]}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_shortcut_route_omits_empty_ignore_lists() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/shortcuts/quote"))
        .and(query_param("tokenIn", "0x01"))
        .and(query_param("disableRFQs", "true"))
        .and(query_param_is_missing("ignoreAggregators"))
        .and(query_param("ignoreStandards", "erc4626"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"amountOut": "42"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = GetShortcutRouteTool
        .call(
            &client,
            json!({
                "chain_id": 1,
                "from_address": VITALIK,
                "routing_strategy": "router",
                "token_in": "0x01",
                "token_out": "0x02",
                "amount_in": "1000",
                "fee": "0",
                "fee_receiver": VITALIK,
                "disable_rfqs": true,
                "ignore_standards": "erc4626"
            }),
        )
        .await
        .unwrap();
    assert_eq!(result["amountOut"], "42");
}

#[tokio::test]
async fn test_bundle_posts_json_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/shortcuts/bundle"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "chainId": 1,
            "fromAddress": VITALIK,
            "routingStrategy": "delegate",
            "receiver": VITALIK,
            "spender": VITALIK
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bundle": []})))
        .expect(1)
        .mount(&server)
        .await;

    PostBundleInfoTool
        .call(
            &client,
            json!({
                "chain_id": 1,
                "from_address": VITALIK,
                "routing_strategy": "delegate",
                "receiver": VITALIK,
                "spender": VITALIK
            }),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_swap_tokens_keeps_arrays() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/shortcuts/route"))
        .and(body_json(json!({
            "chainId": 1,
            "fromAddress": VITALIK,
            "routingStrategy": "router",
            "receiver": VITALIK,
            "spender": VITALIK,
            "tokenIn": ["0x01"],
            "tokenOut": ["0x02"],
            "amountIn": ["1000"],
            "slippage": "50",
            "disableRFQs": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tx": {"data": "0x"}})))
        .expect(1)
        .mount(&server)
        .await;

    let result = PostSwapTokensTool
        .call(
            &client,
            json!({
                "chain_id": 1,
                "from_address": VITALIK,
                "routing_strategy": "router",
                "receiver": VITALIK,
                "spender": VITALIK,
                "token_in": ["0x01"],
                "token_out": ["0x02"],
                "amount_in": ["1000"],
                "slippage": "50"
            }),
        )
        .await
        .unwrap();
    assert!(result.get("tx").is_some());
}

#[tokio::test]
async fn test_status_errors_carry_code() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/shortcuts/route/1/0xdead"))
        .respond_with(ResponseTemplate::new(404).set_body_string("token not found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = GetTokenPricesTool
        .call(&client, json!({"chain_id": 1, "address": "0xdead"}))
        .await
        .unwrap_err();
    assert!(matches!(&err, EnsoError::Status { status: 404, body } if body == "token not found"));
    assert!(err.to_string().contains("404"));

    let err = GetActionsTool.call(&client, json!({})).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on the discard port.
    let client = EnsoClient::new("http://127.0.0.1:9", Some(TOKEN.into())).unwrap();
    let err = GetActionsTool.call(&client, json!({})).await.unwrap_err();

    assert!(matches!(err, EnsoError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = GetActionsTool.call(&client, json!({})).await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_each_call_is_independent() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(GetActionsTool.call(&client, json!({})).await.is_err());
    assert_eq!(GetActionsTool.call(&client, json!({})).await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_registry_dispatch_hits_mapped_path() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/wallet/approvals"))
        .and(query_param("fromAddress", VITALIK))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let registry = ToolRegistry::enso();
    let tool = registry.get("approvals_wallet_token").unwrap();
    tool.call(&client, json!({"from_address": VITALIK}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_execute_raw_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/static/ipor"))
        .and(body_json(json!({"chainId": 1, "address": "0xabc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apy": "4.2"})))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Endpoint::post(&["static", "ipor"])
        .with_body(&json!({"chainId": 1, "address": "0xabc"}))
        .unwrap();
    let request = ApiRequest::new(TOKEN, endpoint).unwrap();
    let result = client.execute(&request).await.unwrap();
    assert_eq!(result["apy"], "4.2");
}
