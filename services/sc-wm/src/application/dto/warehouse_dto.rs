//! 仓库请求/响应模型

use invena_common::{Pagination, TenantId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::warehouse::{Warehouse, WarehouseId};

/// 创建仓库请求
///
/// title 必填且长度 3-50；其余字段不作约束
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWarehouseRequest {
    pub title: String,
    #[serde(default)]
    pub address: String,
    /// 缺省时归属当前租户
    pub account_id: Option<TenantId>,
    #[serde(default)]
    pub is_used: bool,
}

/// 更新仓库请求
///
/// 空字段不覆盖既有值；is_used 例外，总是覆盖（缺省反序列化为 false）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWarehouseRequest {
    pub title: Option<String>,
    pub address: Option<String>,
    pub account_id: Option<TenantId>,
    #[serde(default)]
    pub is_used: bool,
}

/// 列表查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseQuery {
    #[serde(default)]
    pub pagination: Pagination,
    pub keyword: Option<String>,
}

/// 仓库响应投影
///
/// 审计字段不对外暴露
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseResponse {
    pub id: WarehouseId,
    pub owner_id: UserId,
    pub account_id: TenantId,
    pub title: String,
    pub address: String,
    pub is_used: bool,
}

impl From<&Warehouse> for WarehouseResponse {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id.clone(),
            owner_id: warehouse.owner_id.clone(),
            account_id: warehouse.account_id.clone(),
            title: warehouse.title.clone(),
            address: warehouse.address.clone(),
            is_used: warehouse.is_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{TenantScope, WarehouseTitle};

    #[test]
    fn test_response_drops_audit_fields() {
        let scope = TenantScope::new(TenantId::new(), UserId::new());
        let title = WarehouseTitle::new("Main Depot").unwrap();
        let warehouse = Warehouse::create(&scope, title, "12 Dock Rd".to_string(), true);

        let response = WarehouseResponse::from(&warehouse);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["title"], "Main Depot");
        assert_eq!(json["is_used"], true);
        assert!(json.get("audit_info").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_update_request_omitted_is_used_defaults_to_false() {
        let request: UpdateWarehouseRequest =
            serde_json::from_str(r#"{"title": "New Name"}"#).unwrap();

        assert_eq!(request.title.as_deref(), Some("New Name"));
        assert!(request.address.is_none());
        // 缺省的 is_used 反序列化为 false，更新时仍会覆盖
        assert!(!request.is_used);
    }
}
