//! HWClient - 作业管理系统客户端核心
//!
//! 作业生命周期分桶、提交文件命名校验和课程选择编码的纯逻辑层，
//! 网络与界面由宿主应用在外层拼装。
//!
//! # 架构
//! - `cache`: 本地缓存（班级花名册 / 最近选择）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 生命周期推送与初始化
//! - `services`: 业务逻辑层
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod utils;
