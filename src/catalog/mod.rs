//! Monkey reference catalog for Canopy.
//!
//! The catalog is a read-only dataset of monkey species and individual
//! monkeys. It is constructed once when the application is composed and then
//! injected wherever lookups are needed; nothing here is global.
//!
//! - Domain types in [`domain`]
//! - The bundled dataset in [`builtin`]
//! - Query operations in [`services`]

pub mod builtin;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
