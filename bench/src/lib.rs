//! Catalog Measurement Tooling
//!
//! Client-side tooling for the dual-protocol catalog service:
//!
//! - **`seeder`**: Populates both front-ends with identical sample data so
//!   benchmark runs start from the same catalog state.
//!
//! The binaries (`benchmark`, `seeder`) read their endpoints from the
//! `REST_URL` and `RPC_ADDR` environment variables and default to the
//! server's standard local ports.

pub mod seeder;

/// REST endpoint used when `REST_URL` is not set.
pub const DEFAULT_REST_URL: &str = "http://localhost:5000/books";
/// RPC address used when `RPC_ADDR` is not set.
pub const DEFAULT_RPC_ADDR: &str = "localhost:50051";

/// Resolves the REST endpoint from the environment.
pub fn rest_url_from_env() -> String {
    std::env::var("REST_URL").unwrap_or_else(|_| DEFAULT_REST_URL.to_string())
}

/// Resolves the RPC address from the environment.
pub fn rpc_addr_from_env() -> String {
    std::env::var("RPC_ADDR").unwrap_or_else(|_| DEFAULT_RPC_ADDR.to_string())
}
