//! Step definitions for job tracking behaviour tests.

pub mod then;
pub mod when;
pub mod world;
