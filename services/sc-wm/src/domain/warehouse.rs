//! 仓库聚合根

use derive_more::{Display, From};
use invena_common::{AuditInfo, TenantId, UserId};
use invena_domain_core::{AggregateRoot, Entity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{TenantScope, WarehouseTitle};

/// 仓库 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct WarehouseId(pub Uuid);

impl WarehouseId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for WarehouseId {
    fn default() -> Self {
        Self::new()
    }
}

/// 仓库聚合根
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// 仓库 ID
    pub id: WarehouseId,
    /// 最后写入者，创建和每次更新都重置为当前操作者
    pub owner_id: UserId,
    /// 租户 ID（多租户分区键）
    pub account_id: TenantId,
    /// 仓库名称，同一租户内唯一（由服务层先查后插保证）
    pub title: String,
    /// 地址
    pub address: String,
    /// 是否已被占用
    pub is_used: bool,
    /// 审计信息
    pub audit_info: AuditInfo,
}

impl Warehouse {
    /// 创建新仓库
    pub fn create(
        scope: &TenantScope,
        title: WarehouseTitle,
        address: String,
        is_used: bool,
    ) -> Self {
        Self {
            id: WarehouseId::new(),
            owner_id: scope.actor.clone(),
            account_id: scope.tenant_id.clone(),
            title: title.into_inner(),
            address,
            is_used,
            audit_info: AuditInfo::new(&scope.actor),
        }
    }

    /// 重命名
    pub fn rename(&mut self, title: WarehouseTitle) {
        self.title = title.into_inner();
    }

    /// 修改地址
    pub fn relocate(&mut self, address: String) {
        self.address = address;
    }

    /// 迁移到另一个租户
    pub fn reassign_tenant(&mut self, account_id: TenantId) {
        self.account_id = account_id;
    }

    /// 设置占用标记
    pub fn set_used(&mut self, used: bool) {
        self.is_used = used;
    }

    /// 刷新审计信息，并把 owner 重置为本次操作者
    pub fn touch(&mut self, actor: &UserId) {
        self.owner_id = actor.clone();
        self.audit_info.touch(actor);
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Warehouse {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> TenantScope {
        TenantScope::new(TenantId::new(), UserId::new())
    }

    #[test]
    fn test_create_sets_owner_and_tenant_from_scope() {
        let scope = scope();
        let title = WarehouseTitle::new("Main Depot").unwrap();

        let warehouse = Warehouse::create(&scope, title, "12 Dock Rd".to_string(), true);

        assert_eq!(warehouse.owner_id, scope.actor);
        assert_eq!(warehouse.account_id, scope.tenant_id);
        assert_eq!(warehouse.title, "Main Depot");
        assert_eq!(warehouse.address, "12 Dock Rd");
        assert!(warehouse.is_used);
        assert_eq!(warehouse.audit_info.created_by, scope.actor);
        assert_eq!(warehouse.audit_info.updated_by, scope.actor);
    }

    #[test]
    fn test_touch_reassigns_owner_to_actor() {
        let scope = scope();
        let title = WarehouseTitle::new("North Yard").unwrap();
        let mut warehouse = Warehouse::create(&scope, title, String::new(), false);

        let editor = UserId::new();
        warehouse.touch(&editor);

        // owner 跟随最后写入者，创建者保持不变
        assert_eq!(warehouse.owner_id, editor);
        assert_eq!(warehouse.audit_info.updated_by, editor);
        assert_eq!(warehouse.audit_info.created_by, scope.actor);
    }
}
