//! Todo item lifecycle management for Canopy.
//!
//! This module owns the todo item aggregate, its persistence port, and the
//! lifecycle service that validates input, enforces completion idempotence,
//! orders listings, and computes completion statistics. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
