use chrono::{DateTime, Utc};

use crate::config::UploadConfig;
use crate::errors::{HWClientError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::services::lifecycle::LifecyclePolicy;
use crate::services::naming::validate::split_extension;

/// 当前时刻能否提交该作业
///
/// 三个条件缺一不可：服务端状态仍为进行中、当前用户尚未提交、
/// 未超出截止后的补交窗口。补交窗口的最后一刻仍然放行。
pub fn can_submit(assignment: &Assignment, now: DateTime<Utc>, policy: &LifecyclePolicy) -> bool {
    assignment.status == AssignmentStatus::Ongoing
        && !assignment.user_submitted
        && now <= assignment.deadline + policy.late_window
}

/// 上传前的本地预检
///
/// 只看文件名和字节数，不读文件内容。达到大小上限即拒绝，
/// 扩展名比对不区分大小写。
pub fn precheck_upload(file_name: &str, size: usize, config: &UploadConfig) -> Result<()> {
    if size >= config.max_size {
        let limit_mb = config.max_size / 1024 / 1024;
        return Err(HWClientError::validation(format!(
            "文件大小不能超过{limit_mb}MB"
        )));
    }

    let (_, extension) = split_extension(file_name);
    let extension = extension.to_lowercase();
    if extension.is_empty() || !config.allowed_types.iter().any(|t| *t == extension) {
        return Err(HWClientError::validation(format!(
            "不支持的文件类型: '{extension}'. 允许的类型: {}",
            config.allowed_types.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::CourseId;
    use chrono::TimeZone;

    fn assignment(status: AssignmentStatus, user_submitted: bool) -> Assignment {
        Assignment {
            id: 1,
            title: "第三章作业".to_string(),
            course: CourseId::OperatingSystem,
            description: None,
            status,
            deadline: Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap(),
            user_submitted,
            submitted_at: None,
            naming_rule: None,
        }
    }

    fn policy() -> LifecyclePolicy {
        LifecyclePolicy::default()
    }

    #[test]
    fn test_can_submit_before_deadline() {
        let a = assignment(AssignmentStatus::Ongoing, false);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert!(can_submit(&a, now, &policy()));
    }

    #[test]
    fn test_can_submit_within_late_window() {
        // 截止后一天内仍然放行补交
        let a = assignment(AssignmentStatus::Ongoing, false);
        let now = Utc.with_ymd_and_hms(2024, 3, 16, 10, 0, 0).unwrap();
        assert!(can_submit(&a, now, &policy()));
    }

    #[test]
    fn test_can_submit_late_window_boundary() {
        let a = assignment(AssignmentStatus::Ongoing, false);
        let edge = Utc.with_ymd_and_hms(2024, 3, 16, 16, 0, 0).unwrap();
        assert!(can_submit(&a, edge, &policy()));
        assert!(!can_submit(&a, edge + chrono::Duration::seconds(1), &policy()));
    }

    #[test]
    fn test_cannot_submit_twice() {
        let a = assignment(AssignmentStatus::Ongoing, true);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert!(!can_submit(&a, now, &policy()));
    }

    #[test]
    fn test_cannot_submit_when_finalized() {
        // 服务端提前关闭时即使没到截止也不能提交
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        for status in [AssignmentStatus::Closed, AssignmentStatus::Graded] {
            let a = assignment(status, false);
            assert!(!can_submit(&a, now, &policy()));
        }
    }

    #[test]
    fn test_precheck_accepts_normal_file() {
        let config = UploadConfig::default();
        assert!(precheck_upload("实验报告.pdf", 1024 * 1024, &config).is_ok());
        assert!(precheck_upload("report.docx", 5 * 1024 * 1024, &config).is_ok());
    }

    #[test]
    fn test_precheck_size_limit_is_strict() {
        // 恰好 20MB 也要拒绝
        let config = UploadConfig::default();
        assert!(precheck_upload("report.pdf", 20 * 1024 * 1024, &config).is_err());
        assert!(precheck_upload("report.pdf", 20 * 1024 * 1024 - 1, &config).is_ok());
    }

    #[test]
    fn test_precheck_size_message() {
        let config = UploadConfig::default();
        let err = precheck_upload("report.pdf", 21 * 1024 * 1024, &config).unwrap_err();
        assert_eq!(err.message(), "文件大小不能超过20MB");
    }

    #[test]
    fn test_precheck_rejects_unknown_extension() {
        let config = UploadConfig::default();
        let err = precheck_upload("report.exe", 1024, &config).unwrap_err();
        assert!(err.message().contains("'.exe'"));
    }

    #[test]
    fn test_precheck_extension_case_insensitive() {
        let config = UploadConfig::default();
        assert!(precheck_upload("REPORT.PDF", 1024, &config).is_ok());
        assert!(precheck_upload("作业.Docx", 1024, &config).is_ok());
    }

    #[test]
    fn test_precheck_rejects_missing_extension() {
        let config = UploadConfig::default();
        assert!(precheck_upload("report", 1024, &config).is_err());
        assert!(precheck_upload("report.", 1024, &config).is_err());
    }
}
