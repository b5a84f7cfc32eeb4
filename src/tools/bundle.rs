use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::is_unset_chain;
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct BundleInfo {
    #[serde(default, skip_serializing_if = "is_unset_chain")]
    chain_id: Option<u64>,
    from_address: String,
    routing_strategy: String,
    receiver: String,
    spender: String,
}

pub struct PostBundleInfoTool;

#[async_trait::async_trait]
impl Tool for PostBundleInfoTool {
    fn name(&self) -> &'static str {
        "post_bundle_info"
    }

    fn description(&self) -> &'static str {
        "Get bundle information for a shortcut bundle from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "Chain ID of the network to execute the transaction on"
                },
                "from_address": {
                    "type": "string",
                    "description": "Address of the wallet sending the transaction"
                },
                "routing_strategy": {
                    "type": "string",
                    "description": "Routing strategy to use (router cannot be used here)"
                },
                "receiver": {
                    "type": "string",
                    "description": "Address receiving tokenOut"
                },
                "spender": {
                    "type": "string",
                    "description": "Address spending tokenIn"
                }
            }),
            &["from_address", "routing_strategy", "receiver", "spender"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let bundle: BundleInfo = parse_args(args)?;
        Endpoint::post(&["shortcuts", "bundle"]).with_body(&bundle)
    }
}
