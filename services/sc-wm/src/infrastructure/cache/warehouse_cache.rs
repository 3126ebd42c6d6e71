//! 仓库缓存镜像
//!
//! 写穿镜像：创建/更新成功后把整条记录序列化写入。
//! 全部仓库共用一个 hash key，以字符串化的 id 作为 field 区分；
//! 没有过期和淘汰，删除时不回收对应 field，主流程也从不读回

use async_trait::async_trait;
use invena_errors::{AppError, AppResult};
use invena_ports::CachePort;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::warehouse::Warehouse;

/// 共享 hash key
const WAREHOUSE_HASH_KEY: &str = "warehouse_";

/// 仓库缓存 trait
#[async_trait]
pub trait WarehouseCache: Send + Sync {
    /// 写入一条仓库记录镜像
    async fn store(&self, warehouse: &Warehouse) -> AppResult<()>;

    /// 读出镜像中的全部仓库记录
    async fn load_all(&self) -> AppResult<HashMap<String, Warehouse>>;
}

/// Redis 仓库缓存实现
pub struct RedisWarehouseCache {
    cache: Arc<dyn CachePort>,
}

impl RedisWarehouseCache {
    pub fn new(cache: Arc<dyn CachePort>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl WarehouseCache for RedisWarehouseCache {
    async fn store(&self, warehouse: &Warehouse) -> AppResult<()> {
        let payload = serde_json::to_string(warehouse)
            .map_err(|e| AppError::internal(format!("Failed to serialize warehouse: {}", e)))?;

        self.cache
            .hset_all(
                WAREHOUSE_HASH_KEY,
                &[(warehouse.id.to_string(), payload)],
            )
            .await
    }

    async fn load_all(&self) -> AppResult<HashMap<String, Warehouse>> {
        let entries = self.cache.hgetall(WAREHOUSE_HASH_KEY).await?;

        let mut warehouses = HashMap::with_capacity(entries.len());
        for (id, payload) in entries {
            let warehouse: Warehouse = serde_json::from_str(&payload).map_err(|e| {
                AppError::internal(format!("Failed to deserialize warehouse {}: {}", id, e))
            })?;
            warehouses.insert(id, warehouse);
        }

        Ok(warehouses)
    }
}

/// 空操作缓存实现（用于测试或禁用缓存场景）
pub struct NoOpWarehouseCache;

#[async_trait]
impl WarehouseCache for NoOpWarehouseCache {
    async fn store(&self, _warehouse: &Warehouse) -> AppResult<()> {
        Ok(())
    }

    async fn load_all(&self) -> AppResult<HashMap<String, Warehouse>> {
        Ok(HashMap::new())
    }
}
