//! PostgreSQL 仓库仓储实现

use async_trait::async_trait;
use invena_common::{AuditInfo, Pagination, TenantId, UserId};
use invena_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::repositories::WarehouseRepository;
use crate::domain::warehouse::{Warehouse, WarehouseId};

pub struct PostgresWarehouseRepository {
    pool: PgPool,
}

impl PostgresWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PostgresWarehouseRepository {
    async fn list(
        &self,
        tenant_id: &TenantId,
        pagination: &Pagination,
        keyword: Option<&str>,
    ) -> AppResult<(Vec<Warehouse>, i64)> {
        // 计数先于关键字过滤执行，keyword 存在时 total 与列表条数不一致
        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM warehouses WHERE account_id = $1")
                .bind(tenant_id.0)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to count warehouses: {}", e)))?;

        let limit = pagination.limit() as i64;
        let offset = pagination.offset() as i64;

        let rows = match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => {
                sqlx::query_as::<_, WarehouseRow>(
                    "SELECT id, owner_id, account_id, title, address, is_used,
                            created_at, created_by, updated_at, updated_by
                     FROM warehouses
                     WHERE account_id = $1 AND title ILIKE $2
                     ORDER BY created_at DESC LIMIT $3 OFFSET $4",
                )
                .bind(tenant_id.0)
                .bind(format!("%{}%", keyword))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, WarehouseRow>(
                    "SELECT id, owner_id, account_id, title, address, is_used,
                            created_at, created_by, updated_at, updated_by
                     FROM warehouses
                     WHERE account_id = $1
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(tenant_id.0)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list warehouses: {}", e)))?;

        Ok((rows.into_iter().map(Into::into).collect(), total.0))
    }

    async fn create(&self, warehouse: &Warehouse) -> AppResult<Warehouse> {
        sqlx::query_as::<_, WarehouseRow>(
            "INSERT INTO warehouses (id, owner_id, account_id, title, address, is_used,
                                     created_at, created_by, updated_at, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, owner_id, account_id, title, address, is_used,
                       created_at, created_by, updated_at, updated_by",
        )
        .bind(warehouse.id.0)
        .bind(warehouse.owner_id.0)
        .bind(warehouse.account_id.0)
        .bind(&warehouse.title)
        .bind(&warehouse.address)
        .bind(warehouse.is_used)
        .bind(warehouse.audit_info.created_at)
        .bind(warehouse.audit_info.created_by.0)
        .bind(warehouse.audit_info.updated_at)
        .bind(warehouse.audit_info.updated_by.0)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| AppError::database(format!("Failed to create warehouse: {}", e)))
    }

    async fn update(&self, warehouse: &Warehouse) -> AppResult<Warehouse> {
        // 按 id 整行更新；account_id 以行内值为准，允许显式迁移租户
        sqlx::query_as::<_, WarehouseRow>(
            "UPDATE warehouses
             SET owner_id = $2, account_id = $3, title = $4, address = $5, is_used = $6,
                 updated_at = $7, updated_by = $8
             WHERE id = $1
             RETURNING id, owner_id, account_id, title, address, is_used,
                       created_at, created_by, updated_at, updated_by",
        )
        .bind(warehouse.id.0)
        .bind(warehouse.owner_id.0)
        .bind(warehouse.account_id.0)
        .bind(&warehouse.title)
        .bind(&warehouse.address)
        .bind(warehouse.is_used)
        .bind(warehouse.audit_info.updated_at)
        .bind(warehouse.audit_info.updated_by.0)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| AppError::database(format!("Failed to update warehouse: {}", e)))
    }

    async fn delete(&self, tenant_id: &TenantId, id: &WarehouseId) -> AppResult<WarehouseId> {
        // 不区分删除了 0 行还是 1 行
        sqlx::query("DELETE FROM warehouses WHERE id = $1 AND account_id = $2")
            .bind(id.0)
            .bind(tenant_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete warehouse: {}", e)))?;

        Ok(id.clone())
    }

    async fn find_by_id(
        &self,
        tenant_id: &TenantId,
        id: &WarehouseId,
    ) -> AppResult<Option<Warehouse>> {
        sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, owner_id, account_id, title, address, is_used,
                    created_at, created_by, updated_at, updated_by
             FROM warehouses WHERE account_id = $1 AND id = $2",
        )
        .bind(tenant_id.0)
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|e| AppError::database(format!("Failed to find warehouse: {}", e)))
    }

    async fn find_by_title(
        &self,
        tenant_id: &TenantId,
        title: &str,
    ) -> AppResult<Option<Warehouse>> {
        sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, owner_id, account_id, title, address, is_used,
                    created_at, created_by, updated_at, updated_by
             FROM warehouses WHERE account_id = $1 AND title = $2",
        )
        .bind(tenant_id.0)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|e| AppError::database(format!("Failed to find warehouse by title: {}", e)))
    }
}

#[derive(sqlx::FromRow)]
struct WarehouseRow {
    id: uuid::Uuid,
    owner_id: uuid::Uuid,
    account_id: uuid::Uuid,
    title: String,
    address: String,
    is_used: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    created_by: uuid::Uuid,
    updated_at: chrono::DateTime<chrono::Utc>,
    updated_by: uuid::Uuid,
}

impl From<WarehouseRow> for Warehouse {
    fn from(row: WarehouseRow) -> Self {
        Self {
            id: WarehouseId(row.id),
            owner_id: UserId(row.owner_id),
            account_id: TenantId(row.account_id),
            title: row.title,
            address: row.address,
            is_used: row.is_used,
            audit_info: AuditInfo {
                created_at: row.created_at,
                created_by: UserId(row.created_by),
                updated_at: row.updated_at,
                updated_by: UserId(row.updated_by),
            },
        }
    }
}
