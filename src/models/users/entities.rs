use serde::{Deserialize, Serialize};

use crate::models::courses::selection::CourseSelection;

// 用户角色
//
// 线上接口用整数编码：0 管理员，1 学生，2 学委。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,          // 管理员
    Student,        // 学生
    ClassCommittee, // 学委
}

impl UserRole {
    /// 线上接口的整数编码
    pub fn code(&self) -> i64 {
        match self {
            UserRole::Admin => 0,
            UserRole::Student => 1,
            UserRole::ClassCommittee => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<UserRole> {
        match code {
            0 => Some(UserRole::Admin),
            1 => Some(UserRole::Student),
            2 => Some(UserRole::ClassCommittee),
            _ => None,
        }
    }

    /// 展示用中文标签
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "管理员",
            UserRole::Student => "学生",
            UserRole::ClassCommittee => "学委",
        }
    }

    /// 是否具有管理视角（可见已截止列表等管理桶）
    pub fn is_management(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::ClassCommittee)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Student
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        UserRole::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{code}'. 支持的角色: 0 (管理员), 1 (学生), 2 (学委)"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Student => write!(f, "student"),
            UserRole::ClassCommittee => write!(f, "class_committee"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "student" => Ok(UserRole::Student),
            "class_committee" => Ok(UserRole::ClassCommittee),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户资料
//
// 服务端下发的用户对象，字段名与线上接口对齐，单次校验期间视为不可变。
// 命名模板展开前需把班级代码解析成班级名。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    // 学号
    pub student_id: String,
    // 班级代码，需经班级表解析成班级名
    pub class_code: String,
    // 姓名
    #[serde(rename = "real_name")]
    pub full_name: String,
    // 角色
    #[serde(rename = "role_type", default)]
    pub role: UserRole,
    // 选课掩码
    #[serde(default)]
    pub courses: CourseSelection,
}
