//! Dual-Protocol Book Catalog Service Library
//!
//! This library crate defines the core modules of the catalog service.
//! It serves as the foundation for the server binary (`main.rs`) and for the
//! measurement tooling in the `catalog-bench` crate.
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The record store core. Owns the durable book catalog state
//!   (a JSON file on disk), assigns identifiers, and serializes all writes so
//!   that both protocol front-ends observe exactly the same records.
//! - **`rest`**: The HTTP/JSON front-end. Translates REST requests
//!   (`GET /books`, `POST /books`) into catalog calls and serializes results
//!   back to JSON.
//! - **`rpc`**: The binary RPC front-end. Speaks a compact, length-prefixed
//!   bincode protocol over TCP and maps the same two operations onto the same
//!   catalog store. Also provides the typed client used by the seeder and the
//!   benchmark harness.

pub mod catalog;
pub mod rest;
pub mod rpc;
