use serde::{Deserialize, Serialize};

use crate::models::courses::entities::CourseId;

// 作业管理状态
//
// 由服务端下发的三态，线上接口用整数编码：1 进行中，2 已结束，3 已评分。
// 客户端只读不改，生命周期判定把它当作输入之一。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Ongoing, // 进行中
    Closed,  // 已结束
    Graded,  // 已评分
}

impl AssignmentStatus {
    /// 线上接口的整数编码
    pub fn code(&self) -> i64 {
        match self {
            AssignmentStatus::Ongoing => 1,
            AssignmentStatus::Closed => 2,
            AssignmentStatus::Graded => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<AssignmentStatus> {
        match code {
            1 => Some(AssignmentStatus::Ongoing),
            2 => Some(AssignmentStatus::Closed),
            3 => Some(AssignmentStatus::Graded),
            _ => None,
        }
    }

    /// 展示用中文标签
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Ongoing => "进行中",
            AssignmentStatus::Closed => "已结束",
            AssignmentStatus::Graded => "已评分",
        }
    }

    /// 服务端是否已关闭提交窗口
    pub fn is_finalized(&self) -> bool {
        matches!(self, AssignmentStatus::Closed | AssignmentStatus::Graded)
    }
}

impl Serialize for AssignmentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        AssignmentStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "无效的作业状态: '{code}'. 支持的状态: 1 (进行中), 2 (已结束), 3 (已评分)"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Ongoing => write!(f, "ongoing"),
            AssignmentStatus::Closed => write!(f, "closed"),
            AssignmentStatus::Graded => write!(f, "graded"),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(AssignmentStatus::Ongoing),
            "closed" => Ok(AssignmentStatus::Closed),
            "graded" => Ok(AssignmentStatus::Graded),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 生命周期分桶
//
// 互斥的五个桶，任一时刻每条作业恰好落入一个。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleBucket {
    Ongoing,   // 进行中，可提交
    Submitted, // 当前用户已提交
    Overdue,   // 已过截止且未提交，服务端尚未关闭
    Expired,   // 服务端已关闭提交窗口，宽限期内
    Archived,  // 宽限期已过，仅存档视图可见
}

impl LifecycleBucket {
    pub fn all() -> &'static [LifecycleBucket; 5] {
        &[
            LifecycleBucket::Ongoing,
            LifecycleBucket::Submitted,
            LifecycleBucket::Overdue,
            LifecycleBucket::Expired,
            LifecycleBucket::Archived,
        ]
    }

    /// 展示用中文标签
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleBucket::Ongoing => "进行中",
            LifecycleBucket::Submitted => "已提交",
            LifecycleBucket::Overdue => "已逾期",
            LifecycleBucket::Expired => "已截止",
            LifecycleBucket::Archived => "已归档",
        }
    }

    /// 是否仅存档视图可见
    pub fn is_archival(&self) -> bool {
        matches!(self, LifecycleBucket::Archived)
    }

    /// 是否面向管理视角（课代表/管理员的已截止列表）
    pub fn is_management(&self) -> bool {
        matches!(self, LifecycleBucket::Expired)
    }
}

impl<'de> Deserialize<'de> for LifecycleBucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的生命周期分桶: '{s}'. 支持的分桶: ongoing, submitted, overdue, expired, archived"
            ))
        })
    }
}

impl std::fmt::Display for LifecycleBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleBucket::Ongoing => write!(f, "ongoing"),
            LifecycleBucket::Submitted => write!(f, "submitted"),
            LifecycleBucket::Overdue => write!(f, "overdue"),
            LifecycleBucket::Expired => write!(f, "expired"),
            LifecycleBucket::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for LifecycleBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(LifecycleBucket::Ongoing),
            "submitted" => Ok(LifecycleBucket::Submitted),
            "overdue" => Ok(LifecycleBucket::Overdue),
            "expired" => Ok(LifecycleBucket::Expired),
            "archived" => Ok(LifecycleBucket::Archived),
            _ => Err(format!("Invalid lifecycle bucket: {s}")),
        }
    }
}

// 提交标记的线上编码：1 已提交，0 或缺省未提交
mod submission_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(if *value { 1 } else { 0 })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<i64>::deserialize(deserializer)?;
        Ok(code == Some(1))
    }
}

// 作业实体
//
// 一条作业在当前用户视角下的全部输入字段，客户端不改写任何一项。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 所属课程
    pub course: CourseId,
    // 作业描述
    pub description: Option<String>,
    // 服务端管理状态
    pub status: AssignmentStatus,
    // 截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 当前用户是否已提交
    #[serde(rename = "submission_status", with = "submission_flag", default)]
    pub user_submitted: bool,
    // 提交时间
    #[serde(default)]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 提交文件命名规则
    #[serde(default)]
    pub naming_rule: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_codes() {
        assert_eq!(AssignmentStatus::Ongoing.code(), 1);
        assert_eq!(AssignmentStatus::Closed.code(), 2);
        assert_eq!(AssignmentStatus::Graded.code(), 3);
        assert_eq!(AssignmentStatus::from_code(2), Some(AssignmentStatus::Closed));
        assert_eq!(AssignmentStatus::from_code(0), None);
    }

    #[test]
    fn test_status_serde_integer_coded() {
        let json = serde_json::to_string(&AssignmentStatus::Graded).unwrap();
        assert_eq!(json, "3");
        let back: AssignmentStatus = serde_json::from_str("1").unwrap();
        assert_eq!(back, AssignmentStatus::Ongoing);
        assert!(serde_json::from_str::<AssignmentStatus>("9").is_err());
    }

    #[test]
    fn test_status_is_finalized() {
        assert!(!AssignmentStatus::Ongoing.is_finalized());
        assert!(AssignmentStatus::Closed.is_finalized());
        assert!(AssignmentStatus::Graded.is_finalized());
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(LifecycleBucket::Ongoing.label(), "进行中");
        assert_eq!(LifecycleBucket::Archived.label(), "已归档");
        assert!(LifecycleBucket::Archived.is_archival());
        assert!(LifecycleBucket::Expired.is_management());
        assert!(!LifecycleBucket::Overdue.is_management());
    }

    #[test]
    fn test_bucket_serde_round_trip() {
        for bucket in LifecycleBucket::all() {
            let json = serde_json::to_string(bucket).unwrap();
            let back: LifecycleBucket = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *bucket);
        }
    }

    #[test]
    fn test_assignment_wire_format() {
        let json = r#"{
            "id": 42,
            "title": "第三章作业",
            "course": "operating_system",
            "description": null,
            "status": 1,
            "deadline": "2024-03-15T16:00:00Z",
            "submission_status": 1,
            "submitted_at": "2024-03-14T10:30:00Z",
            "naming_rule": "{StudentId}-{FullName}"
        }"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.id, 42);
        assert_eq!(assignment.course, CourseId::OperatingSystem);
        assert_eq!(assignment.status, AssignmentStatus::Ongoing);
        assert!(assignment.user_submitted);
        assert_eq!(
            assignment.deadline,
            chrono::Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_assignment_missing_submission_fields() {
        // 服务端未返回 submission_status 时按未提交处理
        let json = r#"{
            "id": 7,
            "title": "实验一",
            "course": "software_engineering",
            "description": "需求分析报告",
            "status": 2,
            "deadline": "2024-03-15T16:00:00Z"
        }"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert!(!assignment.user_submitted);
        assert!(assignment.submitted_at.is_none());
        assert!(assignment.naming_rule.is_none());
    }

    #[test]
    fn test_assignment_submission_flag_round_trip() {
        let json = r#"{
            "id": 7,
            "title": "实验一",
            "course": "software_engineering",
            "description": null,
            "status": 2,
            "deadline": "2024-03-15T16:00:00Z",
            "submission_status": 0
        }"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert!(!assignment.user_submitted);
        let out = serde_json::to_value(&assignment).unwrap();
        assert_eq!(out["submission_status"], 0);
    }
}
