//! 仓库服务
//!
//! 唯一承载业务规则的组件：输入校验、名称唯一性、删除防护、
//! 响应投影和缓存镜像写入

use std::sync::Arc;

use invena_common::PagedResult;
use invena_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::application::dto::{
    CreateWarehouseRequest, UpdateWarehouseRequest, WarehouseQuery, WarehouseResponse,
};
use crate::domain::repositories::{StockActivityRepository, StockRepository, WarehouseRepository};
use crate::domain::value_objects::{TenantScope, WarehouseTitle};
use crate::domain::warehouse::{Warehouse, WarehouseId};
use crate::infrastructure::cache::WarehouseCache;

pub struct WarehouseService {
    warehouse_repo: Arc<dyn WarehouseRepository>,
    stock_repo: Arc<dyn StockRepository>,
    stock_activity_repo: Arc<dyn StockActivityRepository>,
    cache: Arc<dyn WarehouseCache>,
}

impl WarehouseService {
    pub fn new(
        warehouse_repo: Arc<dyn WarehouseRepository>,
        stock_repo: Arc<dyn StockRepository>,
        stock_activity_repo: Arc<dyn StockActivityRepository>,
        cache: Arc<dyn WarehouseCache>,
    ) -> Self {
        Self {
            warehouse_repo,
            stock_repo,
            stock_activity_repo,
            cache,
        }
    }

    /// 分页查询仓库列表
    ///
    /// total 按存储层计数原样透传
    pub async fn find_all(
        &self,
        scope: &TenantScope,
        query: &WarehouseQuery,
    ) -> AppResult<PagedResult<WarehouseResponse>> {
        let (warehouses, total) = self
            .warehouse_repo
            .list(&scope.tenant_id, &query.pagination, query.keyword.as_deref())
            .await?;

        let items = warehouses.iter().map(WarehouseResponse::from).collect();
        Ok(PagedResult::new(items, total, &query.pagination))
    }

    /// 租户内按 id 查询
    pub async fn find_by_id(
        &self,
        scope: &TenantScope,
        id: &WarehouseId,
    ) -> AppResult<WarehouseResponse> {
        let warehouse = self
            .warehouse_repo
            .find_by_id(&scope.tenant_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Warehouse not found"))?;

        Ok(WarehouseResponse::from(&warehouse))
    }

    /// 创建仓库
    ///
    /// 名称唯一性由先查后插保证，两步之间没有事务边界，
    /// 并发创建同名仓库时可能都通过预检
    pub async fn create(
        &self,
        scope: &TenantScope,
        request: CreateWarehouseRequest,
    ) -> AppResult<Warehouse> {
        let title = WarehouseTitle::new(&request.title)?;

        if self
            .warehouse_repo
            .find_by_title(&scope.tenant_id, title.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Warehouse title '{}' already exists",
                title
            )));
        }

        let mut warehouse = Warehouse::create(scope, title, request.address, request.is_used);
        if let Some(account_id) = request.account_id {
            warehouse.reassign_tenant(account_id);
        }

        let persisted = self.warehouse_repo.create(&warehouse).await?;
        info!(
            warehouse_id = %persisted.id,
            tenant_id = %persisted.account_id,
            "Warehouse created"
        );

        self.mirror(&persisted).await;

        Ok(persisted)
    }

    /// 更新仓库（部分覆盖）
    ///
    /// title/address/account_id 仅在请求里非空时替换既有值；
    /// is_used 总是覆盖（即使请求里缺省为 false）；
    /// 审计字段和 owner 总是刷新为当前操作者
    pub async fn update(
        &self,
        scope: &TenantScope,
        id: &WarehouseId,
        request: UpdateWarehouseRequest,
    ) -> AppResult<Warehouse> {
        // 校验先于加载，名称非法时不暴露目标是否存在
        let title = match request.title.as_deref().filter(|t| !t.is_empty()) {
            Some(t) => Some(WarehouseTitle::new(t)?),
            None => None,
        };

        let mut warehouse = self
            .warehouse_repo
            .find_by_id(&scope.tenant_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Warehouse not found"))?;

        if let Some(title) = title {
            warehouse.rename(title);
        }
        if let Some(address) = request.address.filter(|a| !a.is_empty()) {
            warehouse.relocate(address);
        }
        if let Some(account_id) = request.account_id {
            warehouse.reassign_tenant(account_id);
        }
        warehouse.set_used(request.is_used);
        warehouse.touch(&scope.actor);

        let persisted = self.warehouse_repo.update(&warehouse).await?;
        info!(
            warehouse_id = %persisted.id,
            tenant_id = %persisted.account_id,
            "Warehouse updated"
        );

        self.mirror(&persisted).await;

        Ok(persisted)
    }

    /// 删除仓库
    ///
    /// 仍被库存或库存流水引用的仓库拒绝删除；
    /// 引用检查与删除之间没有原子性保证
    pub async fn delete(&self, scope: &TenantScope, id: &WarehouseId) -> AppResult<WarehouseId> {
        if self
            .warehouse_repo
            .find_by_id(&scope.tenant_id, id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Warehouse not found"));
        }

        let stock_items = self
            .stock_repo
            .find_by_warehouse(&scope.tenant_id, id)
            .await?;
        let latest_activity = self
            .stock_activity_repo
            .find_latest_by_warehouse(&scope.tenant_id, id)
            .await?;

        if !stock_items.is_empty() || latest_activity.is_some() {
            return Err(AppError::failed_precondition(
                "Warehouse is still referenced by stock records",
            ));
        }

        let deleted = self.warehouse_repo.delete(&scope.tenant_id, id).await?;
        info!(warehouse_id = %deleted, tenant_id = %scope.tenant_id, "Warehouse deleted");

        Ok(deleted)
    }

    /// 把持久化结果写进缓存镜像
    ///
    /// 写入失败只记日志和计数，不影响触发它的操作结果
    async fn mirror(&self, warehouse: &Warehouse) {
        if let Err(e) = self.cache.store(warehouse).await {
            metrics::counter!("warehouse_cache_mirror_failures").increment(1);
            warn!(
                warehouse_id = %warehouse.id,
                error = %e,
                "Failed to mirror warehouse into cache"
            );
        }
    }
}
