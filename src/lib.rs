//! Canopy: todo lifecycle management and a monkey reference catalog.
//!
//! The crate provides a todo lifecycle service reachable over a JSON HTTP API
//! and a name-indexed tool-invocation surface, plus a read-only monkey catalog
//! browsed through an interactive console.
//!
//! # Architecture
//!
//! Canopy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `SQLite`)
//!
//! # Modules
//!
//! - [`todo`]: Todo item validation, persistence and lifecycle operations
//! - [`catalog`]: Monkey reference dataset and queries
//! - [`tools`]: Tool definitions and name-based dispatch
//! - [`http`]: Axum router over the lifecycle service and tools
//! - [`console`]: Text menu over the catalog
//! - [`config`]: Command-line configuration for the binaries
//! - [`telemetry`]: Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod console;
pub mod http;
pub mod telemetry;
pub mod todo;
pub mod tools;
