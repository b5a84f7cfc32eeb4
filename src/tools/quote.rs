use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::{is_blank, is_unset_chain, StringOrList};
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct ShortcutRouteQuery {
    #[serde(default, skip_serializing_if = "is_unset_chain")]
    chain_id: Option<u64>,
    from_address: String,
    routing_strategy: String,
    token_in: String,
    token_out: String,
    amount_in: String,
    fee: String,
    fee_receiver: String,
    #[serde(default, rename(serialize = "disableRFQs"))]
    disable_rfqs: bool,
    #[serde(default, skip_serializing_if = "StringOrList::is_empty")]
    ignore_aggregators: StringOrList,
    #[serde(default, skip_serializing_if = "StringOrList::is_empty")]
    ignore_standards: StringOrList,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct ShortcutQuoteBody {
    chain_id: u64,
    from_address: String,
    routing_strategy: String,
    route: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fee: Vec<String>,
    fee_receiver: String,
    #[serde(default, rename(serialize = "disableRFQs"))]
    disable_rfqs: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ignore_aggregators: Vec<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    block_number: Option<String>,
}

pub struct GetShortcutRouteTool;

#[async_trait::async_trait]
impl Tool for GetShortcutRouteTool {
    fn name(&self) -> &'static str {
        "get_shortcut_route"
    }

    fn description(&self) -> &'static str {
        "Get the optimal route and quote for a token swap from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The source chain ID"
                },
                "from_address": {
                    "type": "string",
                    "description": "The source address"
                },
                "routing_strategy": {
                    "type": "string",
                    "description": "Routing strategy (ensowallet, router, delegate)"
                },
                "token_in": {
                    "type": "string",
                    "description": "Address of the token being swapped from"
                },
                "token_out": {
                    "type": "string",
                    "description": "Address of the token being swapped to"
                },
                "amount_in": {
                    "type": "string",
                    "description": "Amount of token_in to swap (in wei)"
                },
                "fee": {
                    "type": "string",
                    "description": "Fee in basis points (0-100) taken from amount_in and sent to fee_receiver"
                },
                "fee_receiver": {
                    "type": "string",
                    "description": "Address receiving the fee"
                },
                "disable_rfqs": {
                    "type": "boolean",
                    "description": "Whether to disable Request for Quotes (RFQs)"
                },
                "ignore_aggregators": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "Aggregators to ignore, comma-separated or as a list"
                },
                "ignore_standards": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "Standards to ignore, comma-separated or as a list"
                }
            }),
            &[
                "from_address",
                "routing_strategy",
                "token_in",
                "token_out",
                "amount_in",
                "fee",
                "fee_receiver",
            ],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let query: ShortcutRouteQuery = parse_args(args)?;
        Endpoint::get(&["shortcuts", "quote"]).with_query(&query)
    }
}

pub struct GetShortcutQuoteTool;

#[async_trait::async_trait]
impl Tool for GetShortcutQuoteTool {
    fn name(&self) -> &'static str {
        "get_shortcut_quote"
    }

    fn description(&self) -> &'static str {
        "Get a quote for a custom multi-step route definition from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The source chain ID"
                },
                "from_address": {
                    "type": "string",
                    "description": "The source address"
                },
                "routing_strategy": {
                    "type": "string",
                    "description": "Routing strategy (e.g. ensowallet)"
                },
                "route": {
                    "type": "array",
                    "items": { "type": "object" },
                    "description": "Route steps, passed to the API unchanged"
                },
                "fee": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Fee for each step of the route"
                },
                "fee_receiver": {
                    "type": "string",
                    "description": "Address receiving the fee"
                },
                "disable_rfqs": {
                    "type": "boolean",
                    "description": "Whether to disable Request for Quotes (RFQs)"
                },
                "ignore_aggregators": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Aggregators to ignore"
                },
                "block_number": {
                    "type": "string",
                    "description": "Block number to quote against"
                }
            }),
            &[
                "chain_id",
                "from_address",
                "routing_strategy",
                "route",
                "fee_receiver",
            ],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let body: ShortcutQuoteBody = parse_args(args)?;
        Endpoint::post(&["shortcuts", "quote"]).with_body(&body)
    }
}
