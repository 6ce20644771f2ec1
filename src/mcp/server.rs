// SPDX-FileCopyrightText: 2026 Procserve Contributors
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use axum::Router;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tower_http::cors::CorsLayer;

use super::types::*;

/// Demo MCP server: one pure tool, no retained state.
#[derive(Clone)]
pub struct ProcServeMcp {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ProcServeMcp {
    pub fn new() -> Self {
        Self { tool_router: Self::tool_router() }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Build the streamable-HTTP application object, ready for an external
    /// listener to serve.
    ///
    /// Requests are handled statelessly (no session affinity), and the whole
    /// router sits behind a fully permissive CORS layer: any origin is echoed
    /// back, all methods and headers pass, credentials are allowed. Local and
    /// demo use only.
    pub fn http_app(&self) -> Router {
        let config =
            StreamableHttpServerConfig { stateful_mode: false, ..Default::default() };
        let session_manager = Arc::new(LocalSessionManager::default());
        let service = {
            let mcp = self.clone();
            StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
        };

        Router::new().nest_service("/mcp", service).layer(CorsLayer::very_permissive())
    }

    /// Process a payload on the server; returns the input prefixed with
    /// `Processed: `.
    #[tool(name = "process_data")]
    async fn process_data(
        &self,
        params: Parameters<ProcessDataParams>,
    ) -> Result<String, ErrorData> {
        Ok(format!("Processed: {}", params.0.input))
    }
}

impl Default for ProcServeMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for ProcServeMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Procserve demo server (tools: process_data)".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
