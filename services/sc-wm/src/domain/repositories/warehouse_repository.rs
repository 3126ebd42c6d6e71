//! 仓库仓储接口

use async_trait::async_trait;
use invena_common::{Pagination, TenantId};
use invena_errors::AppResult;

use crate::domain::warehouse::{Warehouse, WarehouseId};

/// 仓库仓储
///
/// 按字段查找收敛为 find_by_id / find_by_title 两个类型化操作，
/// 查询形状都是租户过滤加单个等值谓词
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// 分页列出租户内的仓库，按创建时间倒序
    ///
    /// keyword 非空时对 title 做不区分大小写的子串过滤；
    /// 计数查询不带关键字条件，返回的总数始终是租户内全量
    async fn list(
        &self,
        tenant_id: &TenantId,
        pagination: &Pagination,
        keyword: Option<&str>,
    ) -> AppResult<(Vec<Warehouse>, i64)>;

    /// 插入新行，返回持久化后的记录
    async fn create(&self, warehouse: &Warehouse) -> AppResult<Warehouse>;

    /// 按 id 整行更新，返回持久化后的记录
    async fn update(&self, warehouse: &Warehouse) -> AppResult<Warehouse>;

    /// 删除同时匹配 id 和租户的行
    ///
    /// 零行受影响与一行受影响不作区分，删除不存在的行静默成功
    async fn delete(&self, tenant_id: &TenantId, id: &WarehouseId) -> AppResult<WarehouseId>;

    /// 租户内按 id 查找
    async fn find_by_id(
        &self,
        tenant_id: &TenantId,
        id: &WarehouseId,
    ) -> AppResult<Option<Warehouse>>;

    /// 租户内按名称精确查找（唯一性预检）
    async fn find_by_title(
        &self,
        tenant_id: &TenantId,
        title: &str,
    ) -> AppResult<Option<Warehouse>>;
}
