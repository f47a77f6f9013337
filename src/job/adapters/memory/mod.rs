//! In-memory adapters for job tracking tests.

mod job;

pub use job::InMemoryJobRepository;
