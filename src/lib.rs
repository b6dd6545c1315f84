//! Tasklite: a task management HTTP service over an embedded SQLite store,
//! plus a small summation exercise.
//!
//! # Architecture
//!
//! The task slice follows hexagonal architecture principles:
//!
//! - **Domain**: validated task values with no infrastructure dependencies
//! - **Ports**: the repository contract services are written against
//! - **Adapters**: SQLite (Diesel) and in-memory implementations
//! - **Services**: business validation and orchestration
//! - **HTTP**: routing, per-route request validation, controllers, and a
//!   single error-to-response boundary
//!
//! # Modules
//!
//! - [`task`]: the request-to-persistence pipeline
//! - [`http`]: the axum surface over the task services
//! - [`config`]: process configuration
//! - [`summation`]: three sum-of-`1..=n` implementations

pub mod config;
pub mod http;
pub mod summation;
pub mod task;
