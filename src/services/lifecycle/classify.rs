//! 生命周期分桶判定
//!
//! 对 (管理状态, 截止时间, 提交标记, 当前时刻) 的纯函数，按固定优先级判定：
//! 1. 已提交 -> Submitted，提交状态压倒一切，提交者视角不再显示逾期或归档；
//! 2. 未截止且服务端状态为进行中 -> Ongoing；
//! 3. 归档时刻（截止 + 宽限期）之前：服务端已关闭 -> Expired，否则 -> Overdue，
//!    服务端状态落后于截止时间时不等它翻转；
//! 4. 归档时刻起 -> Archived，与管理状态无关。
//!
//! 判定内部不缓存任何东西，相同输入永远得到相同分桶。

use chrono::{DateTime, Utc};

use super::LifecyclePolicy;
use crate::models::assignments::entities::{Assignment, AssignmentStatus, LifecycleBucket};
use crate::models::assignments::responses::AssignmentPartition;

/// 单条作业分桶
pub fn classify(
    assignment: &Assignment,
    now: DateTime<Utc>,
    policy: &LifecyclePolicy,
) -> LifecycleBucket {
    if assignment.user_submitted {
        return LifecycleBucket::Submitted;
    }

    if now < assignment.deadline && assignment.status == AssignmentStatus::Ongoing {
        return LifecycleBucket::Ongoing;
    }

    // 提前关闭的作业（截止前就被置为已结束/已评分）同样落在这条分支
    if now < policy.archive_at(assignment.deadline) {
        if assignment.status.is_finalized() {
            LifecycleBucket::Expired
        } else {
            LifecycleBucket::Overdue
        }
    } else {
        LifecycleBucket::Archived
    }
}

/// 全量分桶
///
/// 每条输入恰好进一个桶，桶内保持输入顺序。
pub fn classify_all(
    assignments: &[Assignment],
    now: DateTime<Utc>,
    policy: &LifecyclePolicy,
) -> AssignmentPartition {
    let mut partition = AssignmentPartition::default();
    for assignment in assignments {
        let bucket = classify(assignment, now, policy);
        partition.bucket_mut(bucket).push(assignment.clone());
    }
    partition
}
