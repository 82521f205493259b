//! 命名模板的占位符语法
//!
//! 可识别的占位符只有 {StudentId}、{ClassName}、{FullName} 三个，
//! 其余文本一律按字面量处理，包括长得像占位符的未知 token。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{HWClientError, Result};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(StudentId|ClassName|FullName)\}").expect("Invalid placeholder regex")
});

/// 可识别的占位符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    StudentId, // 学号
    ClassName, // 班级名
    FullName,  // 姓名
}

impl Placeholder {
    /// 模板中的原始 token
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::StudentId => "{StudentId}",
            Placeholder::ClassName => "{ClassName}",
            Placeholder::FullName => "{FullName}",
        }
    }
}

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Placeholder(Placeholder),
    Literal(String),
}

/// 切分模板
///
/// 占位符之外的文本保持原样，相邻字面量不会被拆开。
pub fn tokenize(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in PLACEHOLDER_RE.find_iter(template) {
        if m.start() > last {
            tokens.push(Token::Literal(template[last..m.start()].to_string()));
        }
        let placeholder = match m.as_str() {
            "{StudentId}" => Placeholder::StudentId,
            "{ClassName}" => Placeholder::ClassName,
            _ => Placeholder::FullName,
        };
        tokens.push(Token::Placeholder(placeholder));
        last = m.end();
    }
    if last < template.len() {
        tokens.push(Token::Literal(template[last..].to_string()));
    }
    tokens
}

/// 模板是否含有可识别占位符
pub fn has_placeholder(template: &str) -> bool {
    PLACEHOLDER_RE.is_match(template)
}

/// 规则校验
///
/// 没有任何可识别占位符的模板在录入边界就拒绝，不会进入展开逻辑。
pub fn ensure_valid_rule(template: &str) -> Result<()> {
    if has_placeholder(template) {
        Ok(())
    } else {
        Err(HWClientError::validation(format!(
            "命名规则缺少可识别的占位符: '{template}'. 可用占位符: {{StudentId}}, {{ClassName}}, {{FullName}}"
        )))
    }
}
