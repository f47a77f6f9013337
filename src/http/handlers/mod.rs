//! Request handlers.

pub mod jobs;
pub mod probes;
