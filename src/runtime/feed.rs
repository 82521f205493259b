//! 生命周期推送
//!
//! 判定本身是纯函数，这里是驱动它的外置定时器：按节奏带着新的
//! "当前时刻"重新分桶，分桶变化时把快照推给订阅方，并可按更长的
//! 周期从数据源拉取新的作业清单。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::assignments::entities::{Assignment, LifecycleBucket};
use crate::models::assignments::responses::AssignmentPartition;
use crate::runtime::source::AssignmentSource;
use crate::services::lifecycle::LifecycleService;

/// 生命周期推送器
///
/// 持有当前作业清单和一个 watch 通道，通道里永远是最新的分桶快照。
/// 分桶不变的节拍不惊动订阅方，清单替换则无条件重发。
pub struct LifecycleFeed {
    service: LifecycleService,
    roster: RwLock<Vec<Assignment>>,
    sender: watch::Sender<Arc<AssignmentPartition>>,
    shutdown: Notify,
    tick_interval: Duration,
    refresh_interval: Duration,
}

impl LifecycleFeed {
    /// 按全局配置的周期构建
    pub fn new(service: LifecycleService, assignments: Vec<Assignment>) -> Self {
        let lifecycle = &AppConfig::get().lifecycle;
        Self::with_intervals(
            service,
            assignments,
            Duration::from_secs(lifecycle.tick_interval_secs),
            Duration::from_secs(lifecycle.source_refresh_secs),
        )
    }

    pub fn with_intervals(
        service: LifecycleService,
        assignments: Vec<Assignment>,
        tick_interval: Duration,
        refresh_interval: Duration,
    ) -> Self {
        let partition = service.classify_all(&assignments);
        let (sender, _) = watch::channel(Arc::new(partition));
        Self {
            service,
            roster: RwLock::new(assignments),
            sender,
            shutdown: Notify::new(),
            tick_interval,
            refresh_interval,
        }
    }

    /// 订阅分桶快照
    pub fn subscribe(&self) -> watch::Receiver<Arc<AssignmentPartition>> {
        self.sender.subscribe()
    }

    /// 当前快照
    pub fn snapshot(&self) -> Arc<AssignmentPartition> {
        self.sender.borrow().clone()
    }

    /// 用新的"当前时刻"重新分桶一次
    ///
    /// 桶归属有变化才发布，返回是否发布了新快照。
    pub fn tick(&self) -> bool {
        let roster = self.roster.read().expect("Roster lock poisoned").clone();
        let next = self.service.classify_all(&roster);

        let previous = {
            let guard = self.sender.borrow();
            membership(guard.as_ref())
        };
        let current = membership(&next);
        if previous == current {
            return false;
        }

        log_transitions(&previous, &next);
        self.sender.send_replace(Arc::new(next));
        true
    }

    /// 整体替换作业清单并立即重发快照
    pub fn replace_roster(&self, assignments: Vec<Assignment>) {
        let next = self.service.classify_all(&assignments);
        let previous = {
            let guard = self.sender.borrow();
            membership(guard.as_ref())
        };
        log_transitions(&previous, &next);

        debug!("作业清单已替换，共 {} 条", assignments.len());
        *self.roster.write().expect("Roster lock poisoned") = assignments;
        self.sender.send_replace(Arc::new(next));
    }

    /// 只按节奏重新分桶，不拉取数据
    pub async fn run(&self) {
        self.drive(None).await
    }

    /// 重新分桶之外按刷新周期从数据源拉取清单
    pub async fn run_with_source(&self, source: Arc<dyn AssignmentSource>) {
        self.drive(Some(source)).await
    }

    async fn drive(&self, source: Option<Arc<dyn AssignmentSource>>) {
        let start = tokio::time::Instant::now();
        let mut tick = tokio::time::interval_at(start + self.tick_interval, self.tick_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut refresh =
            tokio::time::interval_at(start + self.refresh_interval, self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

        warn!(
            "生命周期推送启动，判定周期 {:?}，拉取周期 {:?}",
            self.tick_interval, self.refresh_interval
        );

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.tick();
                }
                _ = refresh.tick(), if source.is_some() => {
                    if let Some(source) = &source {
                        match source.fetch().await {
                            Ok(assignments) => self.replace_roster(assignments),
                            Err(e) => warn!("作业数据拉取失败: {}", e),
                        }
                    }
                }
                _ = self.shutdown.notified() => {
                    warn!("生命周期推送停止");
                    break;
                }
            }
        }
    }

    /// 通知 run 循环退出
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }
}

fn membership(partition: &AssignmentPartition) -> HashMap<i64, LifecycleBucket> {
    let mut map = HashMap::new();
    for bucket in LifecycleBucket::all() {
        for assignment in partition.bucket(*bucket) {
            map.insert(assignment.id, *bucket);
        }
    }
    map
}

fn log_transitions(previous: &HashMap<i64, LifecycleBucket>, partition: &AssignmentPartition) {
    for bucket in LifecycleBucket::all() {
        for assignment in partition.bucket(*bucket) {
            match previous.get(&assignment.id) {
                Some(old) if old != bucket => {
                    info!(
                        "作业 {} 由{}转入{}",
                        assignment.id,
                        old.label(),
                        bucket.label()
                    );
                }
                None => debug!("作业 {} 进入{}", assignment.id, bucket.label()),
                _ => {}
            }
        }
    }
}
