use crate::models::submissions::entities::SubmissionRecord;
use crate::models::submissions::requests::HistoryQuery;
use crate::models::submissions::responses::{HistoryResponse, HistorySummary};

/// 按条件筛选提交历史
///
/// 各条件为与关系，保持输入顺序。关键词先去首尾空白再转小写，
/// 空关键词视同未设置。时间上下界均为闭区间。
pub fn filter_history(records: &[SubmissionRecord], query: &HistoryQuery) -> Vec<SubmissionRecord> {
    let keyword = query
        .keyword
        .as_deref()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty());

    records
        .iter()
        .filter(|record| {
            if let Some(kw) = &keyword {
                if !record.title.to_lowercase().contains(kw.as_str()) {
                    return false;
                }
            }
            if let Some(course) = query.course {
                if record.course != course {
                    return false;
                }
            }
            if let Some(punctuality) = query.punctuality {
                if record.punctuality() != punctuality {
                    return false;
                }
            }
            if let Some(from) = query.from {
                if record.submitted_at < from {
                    return false;
                }
            }
            if let Some(to) = query.to {
                if record.submitted_at > to {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// 对一组记录做时效统计
pub fn summarize(records: &[SubmissionRecord]) -> HistorySummary {
    let mut summary = HistorySummary::default();
    for record in records {
        summary.total += 1;
        match record.punctuality() {
            crate::models::submissions::entities::SubmissionPunctuality::OnTime => {
                summary.on_time += 1
            }
            crate::models::submissions::entities::SubmissionPunctuality::Late => summary.late += 1,
        }
    }
    summary
}

/// 筛选并统计，统计基于筛选后的集合
pub fn history(records: &[SubmissionRecord], query: &HistoryQuery) -> HistoryResponse {
    let items = filter_history(records, query);
    let summary = summarize(&items);
    HistoryResponse { items, summary }
}
