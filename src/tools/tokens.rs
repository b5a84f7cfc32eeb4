use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::{is_blank, StringOrList};
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct TokenQuery {
    chain_id: u64,
    #[serde(default, skip_serializing_if = "StringOrList::is_empty")]
    underlying_tokens: StringOrList,
    #[serde(default, skip_serializing_if = "is_blank")]
    protocol_slug: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    primary_address: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    r#type: Option<String>,
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    100
}

pub struct GetTokensInfoTool;

#[async_trait::async_trait]
impl Tool for GetTokensInfoTool {
    fn name(&self) -> &'static str {
        "get_tokens_info"
    }

    fn description(&self) -> &'static str {
        "Get information about tokens known to Enso, filtered by chain, protocol or underlying tokens."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The chain ID"
                },
                "underlying_tokens": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "A single underlying token address or a list of addresses"
                },
                "protocol_slug": {
                    "type": "string",
                    "description": "The protocol slug (e.g. 'aave-v2', 'compound')"
                },
                "primary_address": {
                    "type": "string",
                    "description": "The primary address of the protocol"
                },
                "type": {
                    "type": "string",
                    "description": "The type of the token (e.g. 'defi', 'base')"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number (default: 1)"
                },
                "per_page": {
                    "type": "integer",
                    "description": "Number of tokens per page (default: 100)"
                }
            }),
            &["chain_id"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: TokenQuery = parse_args(args)?;
        Endpoint::get(&["tokens"]).with_query(&query)
    }
}
