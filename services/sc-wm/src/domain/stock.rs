//! 库存读模型
//!
//! 删除防护只读取这两个集合的存在性，记录本身由其它服务维护

use chrono::{DateTime, Utc};
use invena_common::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::warehouse::WarehouseId;

/// 库存记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: Uuid,
    pub account_id: TenantId,
    pub warehouse_id: WarehouseId,
    pub product_id: Uuid,
    pub quantity: i64,
}

/// 库存流水记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockActivity {
    pub id: Uuid,
    pub account_id: TenantId,
    pub warehouse_id: WarehouseId,
    pub product_id: Uuid,
    pub quantity_change: i64,
    pub created_at: DateTime<Utc>,
}
