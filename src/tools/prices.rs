use super::{input_schema, parse_args, Tool};
use crate::error::EnsoError;
use crate::request::Endpoint;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct TokenPriceArgs {
    chain_id: u64,
    address: String,
}

pub struct GetTokenPricesTool;

#[async_trait::async_trait]
impl Tool for GetTokenPricesTool {
    fn name(&self) -> &'static str {
        "get_token_prices"
    }

    fn description(&self) -> &'static str {
        "Get the price of a token on a given chain from the Enso Finance API."
    }

    fn schema(&self) -> Value {
        input_schema(
            json!({
                "chain_id": {
                    "type": "integer",
                    "description": "The chain ID (e.g. 1)"
                },
                "address": {
                    "type": "string",
                    "description": "Token address (e.g. 0x030bA81f1c18d280636F32af80b9AAd02Cf0854e)"
                }
            }),
            &["chain_id", "address"],
        )
    }

    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError> {
        let args: TokenPriceArgs = parse_args(args)?;
        let chain_id = args.chain_id.to_string();
        Ok(Endpoint::get(&[
            "shortcuts",
            "route",
            chain_id.as_str(),
            args.address.as_str(),
        ]))
    }
}
