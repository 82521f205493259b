use serde::Serialize;

use super::entities::{Assignment, LifecycleBucket};
use crate::models::courses::entities::CourseId;

/// 全量分桶结果
///
/// 每条输入作业恰好出现在一个桶里，桶内保持输入顺序。
#[derive(Debug, Default, Serialize)]
pub struct AssignmentPartition {
    pub ongoing: Vec<Assignment>,
    pub submitted: Vec<Assignment>,
    pub overdue: Vec<Assignment>,
    pub expired: Vec<Assignment>,
    pub archived: Vec<Assignment>,
}

impl AssignmentPartition {
    /// 取指定桶
    pub fn bucket(&self, bucket: LifecycleBucket) -> &[Assignment] {
        match bucket {
            LifecycleBucket::Ongoing => &self.ongoing,
            LifecycleBucket::Submitted => &self.submitted,
            LifecycleBucket::Overdue => &self.overdue,
            LifecycleBucket::Expired => &self.expired,
            LifecycleBucket::Archived => &self.archived,
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: LifecycleBucket) -> &mut Vec<Assignment> {
        match bucket {
            LifecycleBucket::Ongoing => &mut self.ongoing,
            LifecycleBucket::Submitted => &mut self.submitted,
            LifecycleBucket::Overdue => &mut self.overdue,
            LifecycleBucket::Expired => &mut self.expired,
            LifecycleBucket::Archived => &mut self.archived,
        }
    }

    /// 全部桶的总条数
    pub fn len(&self) -> usize {
        LifecycleBucket::all()
            .iter()
            .map(|b| self.bucket(*b).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 各桶条数，按固定桶顺序
    pub fn counts(&self) -> Vec<(LifecycleBucket, usize)> {
        LifecycleBucket::all()
            .iter()
            .map(|b| (*b, self.bucket(*b).len()))
            .collect()
    }

    /// 顶栏统计
    pub fn workload(&self) -> WorkloadSummary {
        WorkloadSummary {
            total: self.len(),
            awaiting: self.ongoing.len() + self.overdue.len(),
            submitted: self.submitted.len(),
            expired: self.expired.len(),
            archived: self.archived.len(),
        }
    }
}

/// 顶栏工作量统计
///
/// 待提交为进行中与已逾期两桶之和。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadSummary {
    pub total: usize,
    pub awaiting: usize,
    pub submitted: usize,
    pub expired: usize,
    pub archived: usize,
}

/// 列表项视图
///
/// 在分桶结果之上补齐倒计时、归档时长等展示字段。
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub id: i64,
    pub title: String,
    pub course: CourseId,
    pub course_name: String,
    pub bucket: LifecycleBucket,
    pub bucket_label: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub naming_rule: Option<String>,
    pub countdown: String,   // 截止倒计时文本
    pub archive_age: String, // 归档时长文本
    pub can_submit: bool,    // 当前时刻是否还能提交
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::AssignmentStatus;
    use crate::models::courses::entities::CourseId;
    use chrono::{TimeZone, Utc};

    fn make_assignment(id: i64) -> Assignment {
        Assignment {
            id,
            title: format!("作业 {id}"),
            course: CourseId::SoftwareEngineering,
            description: None,
            status: AssignmentStatus::Ongoing,
            deadline: Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap(),
            user_submitted: false,
            submitted_at: None,
            naming_rule: None,
        }
    }

    #[test]
    fn test_workload_summary() {
        let mut partition = AssignmentPartition::default();
        partition.ongoing.push(make_assignment(1));
        partition.ongoing.push(make_assignment(2));
        partition.overdue.push(make_assignment(3));
        partition.submitted.push(make_assignment(4));
        partition.archived.push(make_assignment(5));

        assert_eq!(
            partition.workload(),
            WorkloadSummary {
                total: 5,
                awaiting: 3,
                submitted: 1,
                expired: 0,
                archived: 1,
            }
        );
    }

    #[test]
    fn test_partition_counts_follow_bucket_order() {
        let mut partition = AssignmentPartition::default();
        partition.expired.push(make_assignment(1));
        let counts = partition.counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[3], (LifecycleBucket::Expired, 1));
        assert!(partition.bucket(LifecycleBucket::Ongoing).is_empty());
        assert!(!partition.is_empty());
    }
}
