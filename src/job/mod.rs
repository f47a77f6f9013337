//! Job application tracking.
//!
//! Records are created, listed, filtered, partially updated and deleted
//! through [`services::JobTracker`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the listing query model in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
