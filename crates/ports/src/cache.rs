//! Cache trait 定义

use async_trait::async_trait;
use invena_errors::AppResult;
use std::collections::HashMap;
use std::time::Duration;

/// 缓存 trait
///
/// 字符串键值操作加 hash 字段操作（HSET / HGETALL 语义）
#[async_trait]
pub trait CachePort: Send + Sync {
    /// 获取缓存值
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 设置缓存值
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()>;

    /// 删除缓存
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// 检查是否存在
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// 设置过期时间
    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<()>;

    /// 向 hash 写入一组 field -> value
    async fn hset_all(&self, key: &str, fields: &[(String, String)]) -> AppResult<()>;

    /// 读取 hash 的全部 field -> value
    async fn hgetall(&self, key: &str) -> AppResult<HashMap<String, String>>;
}
