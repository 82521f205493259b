//! 模板展开与分隔符归一
//!
//! 展开分三步：占位符替换、相邻边界补分隔符、归一化。
//! 补分隔符只看模板里的 token 边界，不看展开后的内容，
//! 空字段留下的多余分隔符由归一化统一清掉。

use once_cell::sync::Lazy;
use regex::Regex;

use super::NamingContext;
use super::template::{Token, tokenize};

static SEPARATOR_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("Invalid separator regex"));

/// 展开期望文件名
pub fn expand(template: &str, context: &NamingContext) -> String {
    let tokens = tokenize(template);
    let mut raw = String::new();
    for (index, token) in tokens.iter().enumerate() {
        if index > 0 && needs_separator(&tokens[index - 1], token) {
            raw.push('-');
        }
        match token {
            Token::Placeholder(placeholder) => raw.push_str(context.field(*placeholder)),
            Token::Literal(text) => raw.push_str(text),
        }
    }
    normalize_separators(&raw)
}

// 相邻 token 之间是否补分隔符：两个占位符之间必补；
// 占位符与字面量相邻时看字面量一侧的字符，已是分隔符或空白则不补。
fn needs_separator(left: &Token, right: &Token) -> bool {
    match (left, right) {
        (Token::Placeholder(_), Token::Placeholder(_)) => true,
        (Token::Literal(text), Token::Placeholder(_)) => {
            text.chars().next_back().map(joinable).unwrap_or(false)
        }
        (Token::Placeholder(_), Token::Literal(text)) => {
            text.chars().next().map(joinable).unwrap_or(false)
        }
        // tokenize 不会产生相邻字面量
        (Token::Literal(_), Token::Literal(_)) => false,
    }
}

fn joinable(c: char) -> bool {
    c != '-' && !c.is_whitespace()
}

// 连续分隔符并为一个，再去掉首尾分隔符
fn normalize_separators(raw: &str) -> String {
    let collapsed = SEPARATOR_RUN_RE.replace_all(raw, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> NamingContext {
        NamingContext::new("20230001", "CS23-1", "Zhang San")
    }

    #[test]
    fn test_expand_reference_template() {
        let expanded = expand("{StudentId}-{ClassName}-{FullName}", &context());
        assert_eq!(expanded, "20230001-CS23-1-Zhang San");
    }

    #[test]
    fn test_expand_is_deterministic() {
        let template = "{StudentId}-{ClassName}-{FullName}";
        assert_eq!(expand(template, &context()), expand(template, &context()));
    }

    #[test]
    fn test_adjacent_placeholders_get_separator() {
        assert_eq!(
            expand("{StudentId}{ClassName}", &context()),
            "20230001-CS23-1"
        );
        assert_eq!(
            expand("{StudentId}{ClassName}{FullName}", &context()),
            "20230001-CS23-1-Zhang San"
        );
    }

    #[test]
    fn test_literal_neighbors_get_separator() {
        assert_eq!(expand("hw3{StudentId}", &context()), "hw3-20230001");
        assert_eq!(expand("{StudentId}第三次作业", &context()), "20230001-第三次作业");
    }

    #[test]
    fn test_existing_separator_not_doubled() {
        assert_eq!(
            expand("{StudentId}-{ClassName}", &context()),
            "20230001-CS23-1"
        );
        // 空白同样不补
        assert_eq!(
            expand("hw 3 {FullName}", &context()),
            "hw 3 Zhang San"
        );
    }

    #[test]
    fn test_empty_field_collapses_cleanly() {
        let ctx = NamingContext::new("20230001", "", "Zhang San");
        // 中间为空：两侧分隔符并为一个
        assert_eq!(
            expand("{StudentId}-{ClassName}-{FullName}", &ctx),
            "20230001-Zhang San"
        );
        // 末尾为空：不留悬挂分隔符
        assert_eq!(expand("{StudentId}-{ClassName}", &ctx), "20230001");
        // 全空：展开为空串
        let empty = NamingContext::new("", "", "");
        assert_eq!(expand("{StudentId}{ClassName}", &empty), "");
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        assert_eq!(
            expand("{StudentId}{Nickname}", &context()),
            "20230001-{Nickname}"
        );
    }

    #[test]
    fn test_literal_only_template_passes_through() {
        assert_eq!(expand("第三次作业", &context()), "第三次作业");
        assert_eq!(expand("", &context()), "");
    }

    #[test]
    fn test_no_doubled_separator_anywhere() {
        // 展开结果里不出现相邻的两个分隔符
        let templates = [
            "{StudentId}{ClassName}{FullName}",
            "{StudentId}--{ClassName}",
            "-{StudentId}-",
            "a{StudentId}b{ClassName}c",
        ];
        for template in templates {
            let expanded = expand(template, &context());
            assert!(!expanded.contains("--"), "doubled separator in {expanded:?}");
            assert!(!expanded.starts_with('-'), "leading separator in {expanded:?}");
            assert!(!expanded.ends_with('-'), "trailing separator in {expanded:?}");
        }
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(
            expand("{StudentId}-{StudentId}", &context()),
            "20230001-20230001"
        );
    }
}
