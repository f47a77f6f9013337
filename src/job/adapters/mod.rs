//! Adapter implementations for job tracking ports.

pub mod memory;
pub mod postgres;
