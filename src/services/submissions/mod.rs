pub mod gate;
pub mod history;

use chrono::{DateTime, Utc};

use crate::config::{AppConfig, UploadConfig};
use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::{SubmissionPunctuality, SubmissionRecord};
use crate::models::submissions::requests::HistoryQuery;
use crate::models::submissions::responses::{HistoryResponse, HistorySummary};
use crate::services::lifecycle::LifecyclePolicy;

/// 提交服务
///
/// 客户端侧的提交前检查和历史筛选，上传传输本身由外层完成。
pub struct SubmissionService {
    policy: LifecyclePolicy,
    upload: UploadConfig,
}

impl SubmissionService {
    pub fn new(policy: LifecyclePolicy, upload: UploadConfig) -> Self {
        Self { policy, upload }
    }

    /// 全局配置的默认组合
    pub fn from_config() -> Self {
        Self::new(
            LifecyclePolicy::from_config(),
            AppConfig::get().upload.clone(),
        )
    }

    /// 当前时刻能否提交该作业
    pub fn can_submit(&self, assignment: &Assignment, now: DateTime<Utc>) -> bool {
        gate::can_submit(assignment, now, &self.policy)
    }

    /// 上传前检查文件大小和类型
    pub fn precheck_upload(&self, file_name: &str, size: usize) -> crate::errors::Result<()> {
        gate::precheck_upload(file_name, size, &self.upload)
    }

    /// 某次提交的时效
    pub fn punctuality(
        &self,
        submitted_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> SubmissionPunctuality {
        SubmissionPunctuality::from_times(submitted_at, deadline)
    }

    /// 按条件筛选提交历史
    pub fn filter_history(
        &self,
        records: &[SubmissionRecord],
        query: &HistoryQuery,
    ) -> Vec<SubmissionRecord> {
        history::filter_history(records, query)
    }

    /// 基于筛选结果的统计
    pub fn summarize(&self, records: &[SubmissionRecord]) -> HistorySummary {
        history::summarize(records)
    }

    /// 筛选加统计一次拿全
    pub fn history(
        &self,
        records: &[SubmissionRecord],
        query: &HistoryQuery,
    ) -> HistoryResponse {
        history::history(records, query)
    }
}
