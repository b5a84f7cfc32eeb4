use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::string_or_number;
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// Both fields go out even when empty.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct NetworkFilter {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    chain_id: String,
}

pub struct GetSupportedNetworksTool;

#[async_trait::async_trait]
impl Tool for GetSupportedNetworksTool {
    fn name(&self) -> &'static str {
        "get_supported_networks"
    }

    fn description(&self) -> &'static str {
        "Get the networks supported by the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "name": {
                    "type": "string",
                    "description": "Network name (e.g. Ethereum)"
                },
                "chain_id": {
                    "type": ["string", "integer"],
                    "description": "The chain id (e.g. 1)"
                }
            }),
            &[],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let filter: NetworkFilter = parse_args(args)?;
        Endpoint::get(&["networks"]).with_query(&filter)
    }
}
