use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::{default_true, is_blank, is_unset_chain};
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct WalletQuery {
    #[serde(default, skip_serializing_if = "is_unset_chain")]
    chain_id: Option<u64>,
    from_address: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    routing_strategy: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct ApproveQuery {
    #[serde(flatten)]
    wallet: WalletQuery,
    token_address: String,
    amount: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct BalancesQuery {
    chain_id: u64,
    eoa_address: String,
    #[serde(default = "default_true")]
    use_eoa: bool,
}

fn wallet_properties(from_address: &str) -> Value {
    json!({
        "chain_id": {
            "type": "integer",
            "description": "The chain ID"
        },
        "from_address": {
            "type": "string",
            "description": from_address
        },
        "routing_strategy": {
            "type": "string",
            "description": "Routing strategy (supported values: ensowallet, router, delegate)"
        }
    })
}

pub struct GetWalletInfoTool;

#[async_trait::async_trait]
impl Tool for GetWalletInfoTool {
    fn name(&self) -> &'static str {
        "get_wallet_info"
    }

    fn description(&self) -> &'static str {
        "Get the Enso wallet associated with an address."
    }

    fn schema(&self) -> Value {
        input_schema(
            wallet_properties(
                "The wallet address (e.g. 0xd8da6bf26964af9d7eed9e03e53415d37aa96045)",
            ),
            &["from_address"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: WalletQuery = parse_args(args)?;
        Endpoint::get(&["wallet"]).with_query(&query)
    }
}

pub struct ApproveWalletTokenTool;

#[async_trait::async_trait]
impl Tool for ApproveWalletTokenTool {
    fn name(&self) -> &'static str {
        "approve_wallet_token"
    }

    fn description(&self) -> &'static str {
        "Build an ERC20 approval transaction for a wallet through the Enso Finance API."
    }

    fn schema(&self) -> Value {
        let mut properties = wallet_properties("The wallet address");
        properties["token_address"] = json!({
            "type": "string",
            "description": "The token address"
        });
        properties["amount"] = json!({
            "type": "string",
            "description": "The amount to approve (in wei)"
        });
        input_schema(properties, &["from_address", "token_address", "amount"])
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: ApproveQuery = parse_args(args)?;
        Endpoint::get(&["wallet", "approve"]).with_query(&query)
    }
}

pub struct ApprovalsWalletTokenTool;

#[async_trait::async_trait]
impl Tool for ApprovalsWalletTokenTool {
    fn name(&self) -> &'static str {
        "approvals_wallet_token"
    }

    fn description(&self) -> &'static str {
        "List the token approvals of a wallet through the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(wallet_properties("The wallet address"), &["from_address"])
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: WalletQuery = parse_args(args)?;
        Endpoint::get(&["wallet", "approvals"]).with_query(&query)
    }
}

pub struct GetWalletBalancesTool;

#[async_trait::async_trait]
impl Tool for GetWalletBalancesTool {
    fn name(&self) -> &'static str {
        "get_wallet_balances"
    }

    fn description(&self) -> &'static str {
        "Get the token balances of a wallet from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The chain ID"
                },
                "eoa_address": {
                    "type": "string",
                    "description": "The externally owned account (EOA) address"
                },
                "use_eoa": {
                    "type": "boolean",
                    "description": "Whether to use the EOA address (default: true)"
                }
            }),
            &["chain_id", "eoa_address"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: BalancesQuery = parse_args(args)?;
        Endpoint::get(&["wallet", "balances"]).with_query(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    #[test]
    fn wallet_info_optional_fields() {
        let endpoint = GetWalletInfoTool
            .endpoint(&json!({"from_address": VITALIK}))
            .unwrap();
        assert_eq!(endpoint.path(), "/wallet");
        assert_eq!(
            endpoint.query,
            vec![("fromAddress".to_string(), VITALIK.to_string())]
        );

        let endpoint = GetWalletInfoTool
            .endpoint(&json!({
                "from_address": VITALIK,
                "chain_id": 137,
                "routing_strategy": "delegate"
            }))
            .unwrap();
        assert_eq!(endpoint.query_value("chainId"), Some("137"));
        assert_eq!(endpoint.query_value("routingStrategy"), Some("delegate"));
    }

    #[test]
    fn approve_sends_token_and_amount() {
        let endpoint = ApproveWalletTokenTool
            .endpoint(&json!({
                "from_address": VITALIK,
                "token_address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
                "amount": "1000",
                "routing_strategy": ""
            }))
            .unwrap();
        assert_eq!(endpoint.path(), "/wallet/approve");
        assert_eq!(endpoint.query_value("fromAddress"), Some(VITALIK));
        assert_eq!(
            endpoint.query_value("tokenAddress"),
            Some("0x6B175474E89094C44Da98b954EedeAC495271d0F")
        );
        assert_eq!(endpoint.query_value("amount"), Some("1000"));
        assert_eq!(endpoint.query_value("chainId"), None);
        assert_eq!(endpoint.query_value("routingStrategy"), None);
    }

    #[test]
    fn approvals_targets_its_own_path() {
        let endpoint = ApprovalsWalletTokenTool
            .endpoint(&json!({"from_address": VITALIK, "chain_id": 1}))
            .unwrap();
        assert_eq!(endpoint.path(), "/wallet/approvals");
        assert_eq!(endpoint.query_value("chainId"), Some("1"));
    }

    #[test]
    fn balances_sends_all_three_params() {
        let endpoint = GetWalletBalancesTool
            .endpoint(&json!({"chain_id": 1, "eoa_address": VITALIK}))
            .unwrap();
        assert_eq!(endpoint.path(), "/wallet/balances");
        assert_eq!(endpoint.query_value("chainId"), Some("1"));
        assert_eq!(endpoint.query_value("eoaAddress"), Some(VITALIK));
        assert_eq!(endpoint.query_value("useEoa"), Some("true"));

        let endpoint = GetWalletBalancesTool
            .endpoint(&json!({"chain_id": 1, "eoa_address": VITALIK, "use_eoa": false}))
            .unwrap();
        assert_eq!(endpoint.query_value("useEoa"), Some("false"));
    }

    #[test]
    fn identical_arguments_build_identical_requests() {
        let args = json!({"chain_id": 1, "eoa_address": VITALIK});
        assert_eq!(
            GetWalletBalancesTool.endpoint(&args).unwrap(),
            GetWalletBalancesTool.endpoint(&args).unwrap()
        );
    }
}
