pub mod assignments;
pub mod courses;
pub mod submissions;
pub mod users;

pub use assignments::entities::{Assignment, AssignmentStatus, LifecycleBucket};
pub use assignments::responses::{AssignmentPartition, AssignmentView, WorkloadSummary};
pub use courses::entities::{Course, CourseId};
pub use courses::selection::CourseSelection;
pub use submissions::entities::{SubmissionPunctuality, SubmissionRecord};
pub use submissions::requests::HistoryQuery;
pub use submissions::responses::{HistoryResponse, HistorySummary};
pub use users::entities::{StudentProfile, UserRole};
