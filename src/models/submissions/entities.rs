use serde::{Deserialize, Serialize};

use crate::models::courses::entities::CourseId;

// 提交时效
//
// 线上接口用整数编码：0 按时提交，1 补交。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPunctuality {
    OnTime, // 按时提交
    Late,   // 补交
}

impl SubmissionPunctuality {
    /// 线上接口的整数编码
    pub fn code(&self) -> i64 {
        match self {
            SubmissionPunctuality::OnTime => 0,
            SubmissionPunctuality::Late => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<SubmissionPunctuality> {
        match code {
            0 => Some(SubmissionPunctuality::OnTime),
            1 => Some(SubmissionPunctuality::Late),
            _ => None,
        }
    }

    /// 由提交时刻和截止时刻判定时效
    pub fn from_times(
        submitted_at: chrono::DateTime<chrono::Utc>,
        deadline: chrono::DateTime<chrono::Utc>,
    ) -> SubmissionPunctuality {
        if submitted_at <= deadline {
            SubmissionPunctuality::OnTime
        } else {
            SubmissionPunctuality::Late
        }
    }

    /// 展示用中文标签
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionPunctuality::OnTime => "按时提交",
            SubmissionPunctuality::Late => "补交",
        }
    }
}

impl Serialize for SubmissionPunctuality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for SubmissionPunctuality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        SubmissionPunctuality::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "无效的提交时效: '{code}'. 支持的时效: 0 (按时提交), 1 (补交)"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionPunctuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionPunctuality::OnTime => write!(f, "on_time"),
            SubmissionPunctuality::Late => write!(f, "late"),
        }
    }
}

impl std::str::FromStr for SubmissionPunctuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_time" => Ok(SubmissionPunctuality::OnTime),
            "late" => Ok(SubmissionPunctuality::Late),
            _ => Err(format!("Invalid submission punctuality: {s}")),
        }
    }
}

// 提交历史记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    // 唯一 ID
    pub id: i64,
    // 关联的作业 ID
    pub assignment_id: i64,
    // 作业标题
    pub title: String,
    // 所属课程
    pub course: CourseId,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 作业截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 提交的文件名
    #[serde(default)]
    pub file_name: Option<String>,
    // 分数
    #[serde(default)]
    pub score: Option<f64>,
}

impl SubmissionRecord {
    /// 该条记录的提交时效
    pub fn punctuality(&self) -> SubmissionPunctuality {
        SubmissionPunctuality::from_times(self.submitted_at, self.deadline)
    }
}
