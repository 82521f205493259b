pub mod classify;
pub mod countdown;
pub mod stats;

pub use countdown::Countdown;

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::assignments::entities::{Assignment, LifecycleBucket};
use crate::models::assignments::responses::{AssignmentPartition, AssignmentView};
use crate::models::users::entities::UserRole;
use crate::utils::clock::{Clock, SystemClock};

/// 生命周期判定参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    /// 截止后到归档前的宽限期
    pub grace_period: Duration,
    /// 截止后仍可补交的窗口
    pub late_window: Duration,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            grace_period: Duration::days(3),
            late_window: Duration::days(1),
        }
    }
}

impl LifecyclePolicy {
    /// 从全局配置构造
    pub fn from_config() -> Self {
        let lifecycle = &AppConfig::get().lifecycle;
        Self {
            grace_period: lifecycle.grace_period(),
            late_window: lifecycle.late_window(),
        }
    }

    /// 归档时刻：截止时间加宽限期
    pub fn archive_at(&self, deadline: DateTime<Utc>) -> DateTime<Utc> {
        deadline + self.grace_period
    }
}

/// 生命周期服务
///
/// 判定本身是纯函数，服务只负责注入时钟和判定参数。
/// 长驻视图按固定节奏重新调用即可反映时间流逝，两次调用之间不保留任何状态。
pub struct LifecycleService {
    clock: Arc<dyn Clock>,
    policy: LifecyclePolicy,
}

impl LifecycleService {
    pub fn new(clock: Arc<dyn Clock>, policy: LifecyclePolicy) -> Self {
        Self { clock, policy }
    }

    /// 系统时钟加全局配置的默认组合
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock), LifecyclePolicy::from_config())
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// 单条作业分桶
    pub fn classify(&self, assignment: &Assignment) -> LifecycleBucket {
        classify::classify(assignment, self.clock.now(), &self.policy)
    }

    /// 全量分桶
    pub fn classify_all(&self, assignments: &[Assignment]) -> AssignmentPartition {
        classify::classify_all(assignments, self.clock.now(), &self.policy)
    }

    /// 截止倒计时
    pub fn countdown(&self, deadline: DateTime<Utc>) -> countdown::Countdown {
        countdown::countdown(deadline, self.clock.now())
    }

    /// 截止倒计时文本
    pub fn countdown_text(&self, deadline: DateTime<Utc>) -> String {
        countdown::countdown_text(deadline, self.clock.now())
    }

    /// 归档时长文本
    pub fn archive_age(&self, deadline: DateTime<Utc>) -> String {
        countdown::archive_age_text(deadline, self.clock.now(), &self.policy)
    }

    /// 构建列表视图
    pub fn views(&self, assignments: &[Assignment]) -> Vec<AssignmentView> {
        stats::views(assignments, self.clock.now(), &self.policy)
    }

    /// 按截止时间升序排序
    pub fn sort_by_deadline(assignments: &mut [Assignment]) {
        stats::sort_by_deadline(assignments);
    }

    /// 指定角色可见的分桶
    pub fn visible_buckets(role: UserRole) -> Vec<LifecycleBucket> {
        stats::visible_buckets(role)
    }
}
