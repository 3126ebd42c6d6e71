//! 库存流水查询接口

use async_trait::async_trait;
use invena_common::TenantId;
use invena_errors::AppResult;

use crate::domain::stock::StockActivity;
use crate::domain::warehouse::WarehouseId;

/// 库存流水只读查询
#[async_trait]
pub trait StockActivityRepository: Send + Sync {
    /// 查找引用指定仓库的最近一条流水，没有则返回 None
    async fn find_latest_by_warehouse(
        &self,
        tenant_id: &TenantId,
        warehouse_id: &WarehouseId,
    ) -> AppResult<Option<StockActivity>>;
}
