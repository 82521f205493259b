use serde::{Deserialize, Serialize};

/// 应用配置结构体
///
/// 所有字段均提供默认值，宿主应用可以不带配置文件直接嵌入本库。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub lifecycle: LifecycleConfig,
    pub upload: UploadConfig,
    pub cache: CacheConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "HWClient".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 作业生命周期配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub grace_period_hours: i64,  // 截止后到归档前的宽限期 (小时)
    pub late_window_hours: i64,   // 截止后仍可补交的窗口 (小时)
    pub tick_interval_secs: u64,  // 状态重算周期 (秒)
    pub source_refresh_secs: u64, // 作业数据拉取周期 (秒)
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            grace_period_hours: 72,
            late_window_hours: 24,
            tick_interval_secs: 1,
            source_refresh_secs: 30,
        }
    }
}

/// 上传预检配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: 20 * 1024 * 1024,
            allowed_types: vec![
                ".doc".to_string(),
                ".docx".to_string(),
                ".ppt".to_string(),
                ".pptx".to_string(),
                ".pdf".to_string(),
                ".zip".to_string(),
                ".rar".to_string(),
                ".xls".to_string(),
                ".xlsx".to_string(),
                ".txt".to_string(),
            ],
        }
    }
}

/// 本地缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub seed_builtin: bool, // 是否预置内建班级代码表
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { seed_builtin: true }
    }
}
