//! Shared types for the jobtrack API server and its command-line client.

pub mod assistant;
pub mod job;
pub mod transport;

pub use assistant::ExtractedJobInfo;
pub use job::{Ack, CreateJob, JobRecord, JobStatus, UpdateJob};
