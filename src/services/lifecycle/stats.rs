//! 列表视图构建与角色可见性

use chrono::{DateTime, Utc};

use super::{LifecyclePolicy, classify, countdown};
use crate::models::assignments::entities::{Assignment, LifecycleBucket};
use crate::models::assignments::responses::AssignmentView;
use crate::models::users::entities::UserRole;
use crate::services::submissions::gate;

/// 指定角色可见的分桶
///
/// 已截止和归档列表只开放给管理员和学委，学生只看自己可操作的三个桶。
pub fn visible_buckets(role: UserRole) -> Vec<LifecycleBucket> {
    if role.is_management() {
        LifecycleBucket::all().to_vec()
    } else {
        vec![
            LifecycleBucket::Ongoing,
            LifecycleBucket::Submitted,
            LifecycleBucket::Overdue,
        ]
    }
}

/// 按截止时间升序排序
///
/// 可操作列表展示前调用，截止时间相同的保持输入相对顺序。
pub fn sort_by_deadline(assignments: &mut [Assignment]) {
    assignments.sort_by_key(|assignment| assignment.deadline);
}

/// 构建列表视图
///
/// 在分桶之上补齐倒计时、归档时长和可提交标记，顺序与输入一致。
pub fn views(
    assignments: &[Assignment],
    now: DateTime<Utc>,
    policy: &LifecyclePolicy,
) -> Vec<AssignmentView> {
    assignments
        .iter()
        .map(|assignment| {
            let bucket = classify::classify(assignment, now, policy);
            AssignmentView {
                id: assignment.id,
                title: assignment.title.clone(),
                course: assignment.course,
                course_name: assignment.course.name().to_string(),
                bucket,
                bucket_label: bucket.label().to_string(),
                deadline: assignment.deadline,
                submitted_at: assignment.submitted_at,
                naming_rule: assignment.naming_rule.clone(),
                countdown: countdown::countdown_text(assignment.deadline, now),
                archive_age: countdown::archive_age_text(assignment.deadline, now, policy),
                can_submit: gate::can_submit(assignment, now, policy),
            }
        })
        .collect()
}
