//! 截止倒计时与归档时长
//!
//! 输出跟随列表每秒刷新，24 小时内精确到秒，更远的只到小时。

use chrono::{DateTime, Utc};

use super::LifecyclePolicy;

/// 截止倒计时
///
/// 已过截止为 Closed；最后 24 小时内为 Imminent；更远为 Comfortable。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Closed,
    Imminent { hours: i64, minutes: i64, seconds: i64 },
    Comfortable { days: i64, hours: i64 },
}

/// 计算截止倒计时
pub fn countdown(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    if now >= deadline {
        return Countdown::Closed;
    }

    let remaining = deadline - now;
    let days = remaining.num_days();
    if days == 0 {
        return Countdown::Imminent {
            hours: remaining.num_hours(),
            minutes: remaining.num_minutes() % 60,
            seconds: remaining.num_seconds() % 60,
        };
    }

    Countdown::Comfortable {
        days,
        hours: remaining.num_hours() % 24,
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Closed => write!(f, "已截止"),
            Countdown::Imminent {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}小时 {minutes}分 {seconds}秒"),
            Countdown::Comfortable { days, hours } => write!(f, "{days}天 {hours}小时"),
        }
    }
}

/// 截止倒计时文本
pub fn countdown_text(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    countdown(deadline, now).to_string()
}

/// 归档时长文本
///
/// 未到归档时刻返回「未归档」；之后按 365 天一年、30 天一个月拆分：
/// 「归档 N天」「归档 N个月M天」「归档 N年N个月M天」。
pub fn archive_age_text(
    deadline: DateTime<Utc>,
    now: DateTime<Utc>,
    policy: &LifecyclePolicy,
) -> String {
    let archived_at = policy.archive_at(deadline);
    if now < archived_at {
        return "未归档".to_string();
    }

    let total_days = (now - archived_at).num_days();
    let years = total_days / 365;
    let remainder = total_days % 365;
    let months = remainder / 30;
    let days = remainder % 30;

    if years > 0 {
        format!("归档 {years}年{months}个月{days}天")
    } else if months > 0 {
        format!("归档 {months}个月{days}天")
    } else {
        format!("归档 {days}天")
    }
}
