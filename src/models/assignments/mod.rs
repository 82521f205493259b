pub mod entities;
pub mod responses;

pub use entities::{Assignment, AssignmentStatus, LifecycleBucket};
pub use responses::{AssignmentPartition, AssignmentView, WorkloadSummary};
