//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_hwclient_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HWClientError {
            $($variant(String),)*
        }

        impl HWClientError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HWClientError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HWClientError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HWClientError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HWClientError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HWClientError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_hwclient_errors! {
    Validation("E001", "Validation Error"),
    ConfigLoad("E002", "Configuration Error"),
    Serialization("E003", "Serialization Error"),
    DateParse("E004", "Date Parse Error"),
    SourceFetch("E005", "Assignment Source Error"),
}

impl HWClientError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for HWClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HWClientError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for HWClientError {
    fn from(err: serde_json::Error) -> Self {
        HWClientError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for HWClientError {
    fn from(err: chrono::ParseError) -> Self {
        HWClientError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for HWClientError {
    fn from(err: config::ConfigError) -> Self {
        HWClientError::ConfigLoad(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HWClientError>;
