//! Wordstat MCP Server library.
//!
//! Provides the [`server::WordstatMcpServer`] MCP server handler and tool
//! parameter types. Used by the `wordstat-mcp` binary and available for
//! integration testing.

pub mod server;
pub mod tools;
