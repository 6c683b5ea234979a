use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
        Tool,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info};

use crate::calculator::Calculator;

pub const SERVER_NAME: &str = "calculator-mcp";

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct OperandsRequest {
    #[schemars(description = "First operand")]
    pub a: f64,
    #[schemars(description = "Second operand")]
    pub b: f64,
}

/// Exposes [`Calculator`] operations as MCP tools.
#[derive(Clone)]
pub struct CalculatorServer {
    calculator: Calculator,
    tool_router: ToolRouter<Self>,
}

fn number_result(value: f64) -> CallToolResult {
    CallToolResult::success(vec![Content::text(value.to_string())])
}

#[tool_router]
impl CalculatorServer {
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            tool_router: Self::tool_router(),
        }
    }

    /// Descriptors of every registered tool, in no particular order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    #[tool(description = "Add two numbers and return the sum.")]
    pub fn add(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "add", a, b, "tool called");
        Ok(number_result(self.calculator.add(a, b)))
    }

    #[tool(description = "Subtract the second number from the first and return the difference.")]
    pub fn subtract(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "subtract", a, b, "tool called");
        Ok(number_result(self.calculator.subtract(a, b)))
    }

    #[tool(
        description = "Divide the first number by the second. Fails when the second number is zero."
    )]
    pub fn divide(
        &self,
        Parameters(OperandsRequest { a, b }): Parameters<OperandsRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = "divide", a, b, "tool called");
        match self.calculator.divide(a, b) {
            Ok(result) => Ok(number_result(result)),
            Err(e) => {
                error!(tool = "divide", "{e}");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    #[tool(description = "Describe the operations this calculator supports.")]
    pub fn info(&self) -> Result<CallToolResult, McpError> {
        info!(tool = "info", "tool called");
        Ok(CallToolResult::success(vec![Content::text(
            self.calculator.info(),
        )]))
    }
}

impl Default for CalculatorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Simple calculator server. Use add, subtract and divide with two numbers `a` and `b`; call info for a summary of the operations."
                    .into(),
            ),
        }
    }
}
