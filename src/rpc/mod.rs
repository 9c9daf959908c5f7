//! Binary RPC Front-End Module
//!
//! The compact, schema-typed adapter over the catalog store, the binary
//! counterpart of the `rest` module.
//!
//! ## Wire Format
//! Length-prefixed bincode frames over TCP: a 4-byte little-endian payload
//! length followed by the serialized [`protocol::CatalogRequest`] or
//! [`protocol::CatalogResponse`]. One response per request, in order, until
//! the client closes the connection.
//!
//! ## Submodules
//! - **`protocol`**: Message schema and framing helpers.
//! - **`server`**: Accept loop and request dispatch onto the shared store.
//! - **`client`**: Typed client used by the seeder, the benchmark harness,
//!   and the tests.

pub mod client;
pub mod protocol;
pub mod server;
