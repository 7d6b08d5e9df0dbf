//! Wordstat MCP Server
//!
//! Model Context Protocol server exposing Yandex Wordstat keyword research
//! (phrase frequency, time dynamics, regional distribution, account quota)
//! to LLM agents and orchestrators.

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use wordstat_client::WordstatClient;
use wordstat_mcp::server::WordstatMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordstat_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let token = std::env::var("WORDSTAT_API_TOKEN").unwrap_or_default();
    let client = WordstatClient::new(token)
        .map_err(|e| anyhow::anyhow!("{e}. Set the WORDSTAT_API_TOKEN environment variable."))?;

    tracing::info!("wordstat-mcp starting (stdio transport)");

    let server = WordstatMcpServer::new(client);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
