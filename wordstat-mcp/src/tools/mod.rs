//! MCP tool parameter types and handler implementations.
//!
//! Parameter structs derive `Deserialize + JsonSchema` for MCP tool
//! registration. Handlers are async functions over a [`wordstat_client`]
//! client, returning JSON strings.

pub mod handlers;
pub mod helpers;
pub mod params;

pub use params::*;
