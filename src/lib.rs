//! Jobtrack: an HTTP service for tracking job applications.
//!
//! Clients create, list, filter, update and delete job application records
//! stored in `PostgreSQL`.
//!
//! # Architecture
//!
//! The [`job`] module follows hexagonal architecture principles:
//!
//! - **Domain**: validated records and the listing query model
//! - **Ports**: the repository contract
//! - **Adapters**: `PostgreSQL` (Diesel) and in-memory repositories
//! - **Services**: CRUD orchestration with an injected clock
//!
//! The process shell sits around it:
//!
//! - [`http`]: axum routes, request validation and error translation
//! - [`config`]: settings loaded from the environment
//! - [`telemetry`]: `tracing` subscriber setup
//! - [`server`]: connection pool, migrations and the serve loop

pub mod config;
pub mod http;
pub mod job;
pub mod server;
pub mod telemetry;
