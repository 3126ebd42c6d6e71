//! 租户作用域值对象

use invena_common::{TenantId, UserId};
use serde::{Deserialize, Serialize};

/// 租户作用域
///
/// 上游认证中间件解析出的 (accountId, createdBy) 上下文，
/// 本服务的所有读写都限定在这个分区内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantScope {
    /// 租户 ID
    pub tenant_id: TenantId,
    /// 当前操作者
    pub actor: UserId,
}

impl TenantScope {
    pub fn new(tenant_id: TenantId, actor: UserId) -> Self {
        Self { tenant_id, actor }
    }
}
