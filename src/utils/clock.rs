//! 时钟抽象
//!
//! 生命周期判定全部依赖注入的时钟取当前时刻，保证同一时刻下
//! 所有判定结果一致，也让测试可以自由拨动时间。

use chrono::{DateTime, Utc};
use std::sync::RwLock;

/// 统一的取时接口
pub trait Clock: Send + Sync {
    /// 当前 UTC 时刻
    fn now(&self) -> DateTime<Utc>;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 可手动拨动的时钟，供测试和时间线回放使用
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// 拨到指定时刻
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.write().expect("Clock lock poisoned") = instant;
    }

    /// 向前拨动
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.instant.write().expect("Clock lock poisoned");
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().expect("Clock lock poisoned")
    }
}
