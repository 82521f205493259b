//! 本地键值缓存
//!
//! 承担浏览器端 localStorage 的角色：班级花名册、默认班级代码和
//! 最近一次的课程选择。只在进程内存活，宿主通过 JSON 快照自行落盘。

use std::collections::HashMap;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::courses::selection::CourseSelection;

/// 课程选择掩码的存储键
pub const COURSE_SELECTION_KEY: &str = "user_courses";
/// 默认班级代码的存储键
pub const DEFAULT_CLASS_KEY: &str = "user_class_code";

/// 内建班级代码表
pub const BUILTIN_CLASS_CODES: [(&str, &str); 4] = [
    ("1234", "计科23-1"),
    ("2005", "计科23-2"),
    ("1111", "计科23-3"),
    ("8888", "计科智能"),
];

/// 缓存的 JSON 快照
///
/// 两张表都缺省为空，旧快照缺字段也能载入。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CacheSnapshot {
    #[serde(default)]
    pub classes: HashMap<String, String>,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

/// 本地缓存
///
/// `classes` 是班级代码到班级名的花名册，`values` 是按键存放的
/// 普通字符串。两张表均可并发读写。
pub struct LocalCache {
    classes: DashMap<String, String>,
    values: DashMap<String, String>,
}

impl LocalCache {
    pub fn new(seed_builtin: bool) -> Self {
        let cache = Self {
            classes: DashMap::new(),
            values: DashMap::new(),
        };
        if seed_builtin {
            for (code, name) in BUILTIN_CLASS_CODES {
                cache.classes.insert(code.to_string(), name.to_string());
            }
            debug!("本地缓存预置 {} 条班级代码", BUILTIN_CLASS_CODES.len());
        }
        cache
    }

    /// 按全局配置构建
    pub fn from_config() -> Self {
        Self::new(AppConfig::get().cache.seed_builtin)
    }

    /// 查班级名
    pub fn class_name(&self, code: &str) -> Option<String> {
        self.classes.get(code).map(|entry| entry.value().clone())
    }

    /// 登记或覆盖一条班级代码
    pub fn set_class_name<C: Into<String>, N: Into<String>>(&self, code: C, name: N) {
        self.classes.insert(code.into(), name.into());
    }

    /// 班级代码解析成班级名，查不到时原样返回代码
    pub fn resolve_class_name(&self, code: &str) -> String {
        self.class_name(code).unwrap_or_else(|| code.to_string())
    }

    /// 批量载入班级花名册
    pub fn import_roster<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (code, name) in entries {
            self.classes.insert(code, name);
        }
    }

    /// 用户的默认班级代码
    pub fn default_class_code(&self) -> Option<String> {
        self.value(DEFAULT_CLASS_KEY)
    }

    pub fn set_default_class_code<C: Into<String>>(&self, code: C) {
        self.set_value(DEFAULT_CLASS_KEY, code.into());
    }

    /// 记住本次课程选择
    pub fn remember_selection(&self, selection: CourseSelection) {
        self.set_value(COURSE_SELECTION_KEY, selection.to_string());
    }

    /// 取最近一次课程选择，存值损坏时当作没有
    pub fn last_selection(&self) -> Option<CourseSelection> {
        let raw = self.value(COURSE_SELECTION_KEY)?;
        match raw.parse() {
            Ok(selection) => Some(selection),
            Err(_) => {
                debug!("忽略无法解析的课程掩码存值: {}", raw);
                None
            }
        }
    }

    /// 按键读普通字符串
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    /// 按键写普通字符串
    pub fn set_value<K: Into<String>, V: Into<String>>(&self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// 按键删除
    pub fn remove_value(&self, key: &str) -> Option<String> {
        self.values.remove(key).map(|(_, value)| value)
    }

    /// 清除班级相关存储，课程选择保留
    pub fn clear_class_storage(&self) {
        self.classes.clear();
        self.values.remove(DEFAULT_CLASS_KEY);
    }

    /// 导出快照
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            classes: self
                .classes
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().clone()))
                .collect(),
            values: self
                .values
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().clone()))
                .collect(),
        }
    }

    /// 载入快照，同键覆盖，异键保留
    pub fn restore(&self, snapshot: CacheSnapshot) {
        for (code, name) in snapshot.classes {
            self.classes.insert(code, name);
        }
        for (key, value) in snapshot.values {
            self.values.insert(key, value);
        }
    }

    /// 快照序列化成 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// 从 JSON 字符串载入快照
    pub fn load_json(&self, json: &str) -> Result<()> {
        let snapshot: CacheSnapshot = serde_json::from_str(json)?;
        self.restore(snapshot);
        Ok(())
    }
}

impl Default for LocalCache {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::CourseId;

    #[test]
    fn test_builtin_roster_seeded() {
        let cache = LocalCache::new(true);
        assert_eq!(cache.class_name("1234"), Some("计科23-1".to_string()));
        assert_eq!(cache.class_name("2005"), Some("计科23-2".to_string()));
        assert_eq!(cache.class_name("1111"), Some("计科23-3".to_string()));
        assert_eq!(cache.class_name("8888"), Some("计科智能".to_string()));
    }

    #[test]
    fn test_unseeded_cache_starts_empty() {
        let cache = LocalCache::new(false);
        assert_eq!(cache.class_name("1234"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_code() {
        // 查不到的班级代码原样返回，不造"未知班级"一类的占位名
        let cache = LocalCache::new(true);
        assert_eq!(cache.resolve_class_name("1234"), "计科23-1");
        assert_eq!(cache.resolve_class_name("9999"), "9999");
    }

    #[test]
    fn test_set_class_name_overrides() {
        let cache = LocalCache::new(true);
        cache.set_class_name("1234", "计科24-1");
        assert_eq!(cache.resolve_class_name("1234"), "计科24-1");
    }

    #[test]
    fn test_import_roster() {
        let cache = LocalCache::new(false);
        cache.import_roster(vec![
            ("3001".to_string(), "软工23-1".to_string()),
            ("3002".to_string(), "软工23-2".to_string()),
        ]);
        assert_eq!(cache.resolve_class_name("3002"), "软工23-2");
    }

    #[test]
    fn test_default_class_code() {
        let cache = LocalCache::new(true);
        assert_eq!(cache.default_class_code(), None);
        cache.set_default_class_code("2005");
        assert_eq!(cache.default_class_code(), Some("2005".to_string()));
    }

    #[test]
    fn test_selection_round_trip() {
        let cache = LocalCache::new(true);
        assert_eq!(cache.last_selection(), None);

        let selection: CourseSelection =
            [CourseId::SoftwareEngineering, CourseId::OperatingSystem]
                .into_iter()
                .collect();
        cache.remember_selection(selection);

        // 存的是十进制掩码文本
        assert_eq!(cache.value(COURSE_SELECTION_KEY), Some("5".to_string()));
        assert_eq!(cache.last_selection(), Some(selection));
    }

    #[test]
    fn test_corrupt_selection_reads_as_none() {
        let cache = LocalCache::new(true);
        cache.set_value(COURSE_SELECTION_KEY, "not-a-mask");
        assert_eq!(cache.last_selection(), None);
    }

    #[test]
    fn test_clear_class_storage_keeps_selection() {
        let cache = LocalCache::new(true);
        cache.set_default_class_code("1234");
        cache.remember_selection(CourseSelection::from_mask(3));

        cache.clear_class_storage();
        assert_eq!(cache.class_name("1234"), None);
        assert_eq!(cache.default_class_code(), None);
        assert_eq!(cache.last_selection(), Some(CourseSelection::from_mask(3)));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let cache = LocalCache::new(true);
        cache.set_class_name("3001", "软工23-1");
        cache.set_default_class_code("3001");
        cache.remember_selection(CourseSelection::from_mask(65));

        let json = cache.to_json().unwrap();
        let restored = LocalCache::new(false);
        restored.load_json(&json).unwrap();

        assert_eq!(restored.resolve_class_name("1234"), "计科23-1");
        assert_eq!(restored.resolve_class_name("3001"), "软工23-1");
        assert_eq!(restored.default_class_code(), Some("3001".to_string()));
        assert_eq!(
            restored.last_selection(),
            Some(CourseSelection::from_mask(65))
        );
    }

    #[test]
    fn test_load_json_rejects_garbage() {
        let cache = LocalCache::new(false);
        assert!(cache.load_json("{broken").is_err());
    }

    #[test]
    fn test_snapshot_missing_fields_default_empty() {
        let cache = LocalCache::new(false);
        cache.load_json("{}").unwrap();
        assert_eq!(cache.class_name("1234"), None);
    }
}
