//! Unit tests for the job tracking module.
