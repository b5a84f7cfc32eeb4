use super::{input_schema, Tool};
use crate::error::EnsoError;
use crate::request::Endpoint;
use serde_json::{json, Value};

pub struct GetActionsTool;

#[async_trait::async_trait]
impl Tool for GetActionsTool {
    fn name(&self) -> &'static str {
        "get_actions"
    }

    fn description(&self) -> &'static str {
        "Get the actions available for building Enso shortcuts."
    }

    fn schema(&self) -> Value {
        input_schema(json!({}), &[])
    }

    fn endpoint(&self, _args: &Value) -> Result<Endpoint, EnsoError> {
        Ok(Endpoint::get(&["actions"]))
    }
}
