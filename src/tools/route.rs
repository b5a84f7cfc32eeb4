use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::params::{is_blank, string_or_list};
use crate::request::Endpoint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Parameters of `/shortcuts/route`, shared by the GET and POST forms.
///
/// The POST form keeps list fields as JSON arrays; the GET form sends them comma-joined.
/// The ignore lists also take a comma-separated string.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
struct SwapRoute {
    chain_id: u64,
    from_address: String,
    routing_strategy: String,
    receiver: String,
    spender: String,
    token_in: Vec<String>,
    token_out: Vec<String>,
    amount_in: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    amount_out: Vec<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    min_amount_out: Option<String>,
    slippage: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fee: Vec<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    fee_receiver: Option<String>,
    #[serde(default, rename(serialize = "disableRFQs"))]
    disable_rfqs: bool,
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    ignore_aggregators: Vec<String>,
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    ignore_standards: Vec<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    variable_estimates: Option<String>,
}

const REQUIRED: &[&str] = &[
    "chain_id",
    "from_address",
    "routing_strategy",
    "receiver",
    "spender",
    "token_in",
    "token_out",
    "amount_in",
    "slippage",
];

fn swap_schema() -> Value {
    let list = |description: &str| {
        json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description
        })
    };
    let text = |description: &str| json!({ "type": "string", "description": description });
    let text_or_list = |description: &str| {
        json!({
            "type": ["string", "array"],
            "items": { "type": "string" },
            "description": description
        })
    };

    input_schema(
        json!({
            "chain_id": { "type": "integer", "description": "The chain ID" },
            "from_address": text("The source address"),
            "routing_strategy": text("Routing strategy (ensowallet, router, delegate)"),
            "receiver": text("The recipient address"),
            "spender": text("The spender address"),
            "token_in": list("Tokens to swap from"),
            "token_out": list("Tokens to swap to"),
            "amount_in": list("Amounts of token_in to swap (in wei)"),
            "amount_out": list("Desired amounts of token_out"),
            "min_amount_out": text("Minimum amount of tokens out"),
            "slippage": text("Slippage tolerance in basis points"),
            "fee": list("Fee in basis points for each amount_in"),
            "fee_receiver": text("Address receiving the fee"),
            "disable_rfqs": {
                "type": "boolean",
                "description": "Whether to disable Request for Quotes (RFQs)"
            },
            "ignore_aggregators": text_or_list("Aggregators to ignore, comma-separated or as a list"),
            "ignore_standards": text_or_list("Standards to ignore, comma-separated or as a list"),
            "variable_estimates": text("Variable estimates")
        }),
        REQUIRED,
    )
}

pub struct GetSwapTokensTool;

#[async_trait::async_trait]
impl Tool for GetSwapTokensTool {
    fn name(&self) -> &'static str {
        "get_swap_tokens"
    }

    fn description(&self) -> &'static str {
        "Get a swap route and transaction for tokens from the Enso Finance API (query form)."
    }

    fn schema(&self) -> Value {
        swap_schema()
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let route: SwapRoute = parse_args(args)?;
        Endpoint::get(&["shortcuts", "route"]).with_query(&route)
    }
}

pub struct PostSwapTokensTool;

#[async_trait::async_trait]
impl Tool for PostSwapTokensTool {
    fn name(&self) -> &'static str {
        "post_swap_tokens"
    }

    fn description(&self) -> &'static str {
        "Get a swap route and transaction for tokens from the Enso Finance API (JSON body form)."
    }

    fn schema(&self) -> Value {
        swap_schema()
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let route: SwapRoute = parse_args(args)?;
        Endpoint::post(&["shortcuts", "route"]).with_body(&route)
    }
}
