//! 库存查询接口
//!
//! 本服务只消费这个契约，不负责实现方的数据维护

use async_trait::async_trait;
use invena_common::TenantId;
use invena_errors::AppResult;

use crate::domain::stock::StockItem;
use crate::domain::warehouse::WarehouseId;

/// 库存只读查询
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// 查找引用指定仓库的库存记录
    async fn find_by_warehouse(
        &self,
        tenant_id: &TenantId,
        warehouse_id: &WarehouseId,
    ) -> AppResult<Vec<StockItem>>;
}
