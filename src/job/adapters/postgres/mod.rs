//! `PostgreSQL` adapters for job persistence.

mod models;
mod query;
mod repository;
mod schema;

pub use repository::{JobPgPool, PostgresJobRepository};
