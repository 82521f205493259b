pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{SubmissionPunctuality, SubmissionRecord};
pub use requests::HistoryQuery;
pub use responses::{HistoryResponse, HistorySummary};
