//! 课程多选位掩码编解码
//!
//! 选中的课程集合对外表现为一个非负整数，按位累加课程位值。
//! 解码时目录外的位一律忽略，不会往回带。

use serde::{Deserialize, Serialize};

use super::entities::CourseId;

/// 目录内全部位值之和
pub const CATALOGUE_MASK: u32 = 127;

/// 课程选择集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseSelection(u32);

impl CourseSelection {
    /// 空选择
    pub fn none() -> Self {
        Self(0)
    }

    /// 全选
    pub fn all() -> Self {
        Self(CATALOGUE_MASK)
    }

    /// 编码：集合 -> 位掩码
    pub fn mask(&self) -> u32 {
        self.0
    }

    /// 解码：位掩码 -> 集合，目录外的位静默丢弃
    pub fn from_mask(mask: u32) -> Self {
        Self(mask & CATALOGUE_MASK)
    }

    pub fn contains(&self, course: CourseId) -> bool {
        self.0 & course.bit() != 0
    }

    pub fn insert(&mut self, course: CourseId) {
        self.0 |= course.bit();
    }

    pub fn remove(&mut self, course: CourseId) {
        self.0 &= !course.bit();
    }

    /// 选中则移除，未选中则加入
    pub fn toggle(&mut self, course: CourseId) {
        self.0 ^= course.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// 按目录顺序迭代选中的课程
    pub fn iter(&self) -> impl Iterator<Item = CourseId> + '_ {
        CourseId::all().iter().copied().filter(|c| self.contains(*c))
    }

    /// 选中课程列表，按目录顺序
    pub fn courses(&self) -> Vec<CourseId> {
        self.iter().collect()
    }

    /// 勾选确认的边界校验，空选择直接拒绝
    pub fn ensure_not_empty(&self) -> crate::errors::Result<()> {
        if self.is_empty() {
            return Err(crate::errors::HWClientError::validation(
                "请至少选择一门课程",
            ));
        }
        Ok(())
    }
}

impl From<CourseId> for CourseSelection {
    fn from(course: CourseId) -> Self {
        Self(course.bit())
    }
}

impl FromIterator<CourseId> for CourseSelection {
    fn from_iter<I: IntoIterator<Item = CourseId>>(iter: I) -> Self {
        let mut selection = Self::none();
        for course in iter {
            selection.insert(course);
        }
        selection
    }
}

impl Serialize for CourseSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for CourseSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mask = u32::deserialize(deserializer)?;
        Ok(CourseSelection::from_mask(mask))
    }
}

impl std::fmt::Display for CourseSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CourseSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mask: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid course mask: {s}"))?;
        Ok(CourseSelection::from_mask(mask))
    }
}
