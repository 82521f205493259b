//! 候选文件名校验
//!
//! 比较时先剥掉两侧的扩展名（最后一个 . 之后的部分），
//! 建议名始终返回：期望文件名接上候选文件自己的扩展名，
//! 不匹配时上层拿它做「建议改名」提示，提交本身不拦截。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::NamingContext;
use super::expand::expand;

static EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("Invalid extension regex"));

/// 拆出文件名主干和扩展名（带点，无扩展名时为空串）
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match EXTENSION_RE.find(name) {
        Some(m) => (&name[..m.start()], m.as_str()),
        None => (name, ""),
    }
}

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// 去扩展名后是否严格相等
    pub matched: bool,
    /// 期望文件名，扩展名取自候选文件
    pub expected: String,
}

/// 校验候选文件名
///
/// 对任何合法的模板和资料都不会失败，结果只是布尔加建议名。
pub fn validate(template: &str, context: &NamingContext, candidate: &str) -> ValidationOutcome {
    let expected_name = expand(template, context);
    let (candidate_stem, candidate_ext) = split_extension(candidate);
    let (expected_stem, _) = split_extension(&expected_name);

    ValidationOutcome {
        matched: candidate_stem == expected_stem,
        expected: format!("{expected_name}{candidate_ext}"),
    }
}
