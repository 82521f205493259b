use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::models::courses::entities::CourseId;
use crate::models::submissions::entities::SubmissionPunctuality;

/// 提交历史查询参数
///
/// 所有条件可叠加，留空的条件不过滤。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    /// 标题关键词，不区分大小写的包含匹配
    pub keyword: Option<String>,
    /// 课程过滤
    pub course: Option<CourseId>,
    /// 时效过滤（按时/补交）
    pub punctuality: Option<SubmissionPunctuality>,
    /// 提交时间下界（含）
    pub from: Option<DateTime<Utc>>,
    /// 提交时间上界（含）
    pub to: Option<DateTime<Utc>>,
}

impl HistoryQuery {
    /// 是否未设置任何条件
    pub fn is_unfiltered(&self) -> bool {
        self.keyword.is_none()
            && self.course.is_none()
            && self.punctuality.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }

    /// 用日期选择器风格的 "YYYY-MM-DD" 字符串设置时间范围
    ///
    /// 下界取当天零点，上界取当天最后一秒，两端都含。
    pub fn with_date_range(mut self, from: &str, to: &str) -> crate::errors::Result<Self> {
        let from_day = NaiveDate::parse_from_str(from, "%Y-%m-%d")?;
        let to_day = NaiveDate::parse_from_str(to, "%Y-%m-%d")?;
        self.from = Some(from_day.and_time(NaiveTime::MIN).and_utc());
        self.to = Some(
            to_day.and_time(NaiveTime::MIN).and_utc() + chrono::Duration::days(1)
                - chrono::Duration::seconds(1),
        );
        Ok(self)
    }
}
