pub mod actions;
pub mod bundle;
pub mod networks;
pub mod prices;
pub mod protocols;
pub mod quote;
pub mod route;
pub mod static_info;
pub mod tokens;
pub mod wallet;

use crate::enso::EnsoClient;
use crate::error::EnsoError;
use crate::request::{ApiRequest, Endpoint};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn schema(&self) -> Value;

    /// Maps the call arguments to the endpoint this tool targets.
    fn endpoint(&self, args: &Value) -> Result<Endpoint, EnsoError>;

    async fn call(&self, client: &EnsoClient, args: Value) -> Result<Value, EnsoError> {
        let token = client.resolve_token(args.get("api_token").and_then(Value::as_str))?;
        let request = ApiRequest::new(token, self.endpoint(&args)?)?;
        client.execute(&request).await
    }
}

/// Name-ordered set of tools handed to the server at startup.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enso() -> Self {
        let mut registry = Self::new();
        registry.register(actions::GetActionsTool);
        registry.register(bundle::PostBundleInfoTool);
        registry.register(networks::GetSupportedNetworksTool);
        registry.register(prices::GetTokenPricesTool);
        registry.register(protocols::GetProtocolsTool);
        registry.register(quote::GetShortcutRouteTool);
        registry.register(quote::GetShortcutQuoteTool);
        registry.register(route::GetSwapTokensTool);
        registry.register(route::PostSwapTokensTool);
        registry.register(static_info::PostStaticIporInfoTool);
        registry.register(tokens::GetTokensInfoTool);
        registry.register(wallet::GetWalletInfoTool);
        registry.register(wallet::ApproveWalletTokenTool);
        registry.register(wallet::ApprovalsWalletTokenTool);
        registry.register(wallet::GetWalletBalancesTool);
        registry
    }

    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| &**t)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> + '_ {
        self.tools.values().map(|t| &**t)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, EnsoError> {
    let args = if args.is_null() {
        Value::Object(Map::new())
    } else {
        args.clone()
    };
    serde_json::from_value(args).map_err(EnsoError::invalid_arguments)
}

/// Object schema with the shared optional `api_token` property added.
pub(crate) fn input_schema(properties: Value, required: &[&str]) -> Value {
    let mut properties = match properties {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    properties.insert(
        "api_token".into(),
        json!({
            "type": "string",
            "description": "Enso Finance API token. Falls back to ENSO_API_TOKEN when omitted."
        }),
    );
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}
