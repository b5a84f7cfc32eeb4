use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct IporInfo {
    chain_id: u64,
    address: String,
}

pub struct PostStaticIporInfoTool;

#[async_trait::async_trait]
impl Tool for PostStaticIporInfoTool {
    fn name(&self) -> &'static str {
        "post_static_ipor_info"
    }

    fn description(&self) -> &'static str {
        "Get static IPOR information for an address from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The chain ID"
                },
                "address": {
                    "type": "string",
                    "description": "The IPOR address"
                }
            }),
            &["chain_id", "address"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let info: IporInfo = parse_args(args)?;
        Endpoint::post(&["static", "ipor"]).with_body(&info)
    }
}
