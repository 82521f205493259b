//! 作业数据来源
//!
//! 网络层在库外实现 [`AssignmentSource`]，运行时按刷新周期拉取。
//! [`StaticSource`] 持有一份可替换的清单，测试和内嵌场景直接使用。

use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::assignments::entities::Assignment;

#[async_trait]
pub trait AssignmentSource: Send + Sync {
    /// 拉取当前用户视角下的完整作业清单
    ///
    /// 拉取失败时返回 `source_fetch` 类错误，调用方保留上一份清单。
    async fn fetch(&self) -> Result<Vec<Assignment>>;
}

/// 静态数据源
#[derive(Debug, Default)]
pub struct StaticSource {
    assignments: RwLock<Vec<Assignment>>,
}

impl StaticSource {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments: RwLock::new(assignments),
        }
    }

    /// 整体替换清单
    pub fn replace(&self, assignments: Vec<Assignment>) {
        *self.assignments.write().expect("Source lock poisoned") = assignments;
    }
}

#[async_trait]
impl AssignmentSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Assignment>> {
        Ok(self
            .assignments
            .read()
            .expect("Source lock poisoned")
            .clone())
    }
}
