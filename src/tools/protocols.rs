use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::is_blank;
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
struct ProtocolFilter {
    #[serde(default, skip_serializing_if = "is_blank")]
    slug: Option<String>,
}

pub struct GetProtocolsTool;

#[async_trait::async_trait]
impl Tool for GetProtocolsTool {
    fn name(&self) -> &'static str {
        "get_protocols"
    }

    fn description(&self) -> &'static str {
        "Get the protocols supported by Enso, optionally filtered by slug."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "slug": {
                    "type": "string",
                    "description": "The protocol slug (e.g. 'uniswap-v2')"
                }
            }),
            &[],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let filter: ProtocolFilter = parse_args(args)?;
        Endpoint::get(&["protocols"]).with_query(&filter)
    }
}
