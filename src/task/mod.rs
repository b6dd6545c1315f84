//! Task management: the request-to-persistence pipeline's domain core.
//!
//! Implements create, filtered listing with pagination, lookup, partial
//! update, and deletion of task records over an embedded SQLite store. The
//! module follows hexagonal architecture:
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
