use serde::Serialize;

use crate::models::submissions::entities::SubmissionRecord;

/// 提交历史统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub total: usize,
    pub on_time: usize,
    pub late: usize,
}

/// 提交历史响应
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<SubmissionRecord>,
    pub summary: HistorySummary,
}
