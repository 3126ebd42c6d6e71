//! PostgreSQL 库存流水查询实现

use async_trait::async_trait;
use invena_common::TenantId;
use invena_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::repositories::StockActivityRepository;
use crate::domain::stock::StockActivity;
use crate::domain::warehouse::WarehouseId;

pub struct PostgresStockActivityRepository {
    pool: PgPool,
}

impl PostgresStockActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockActivityRepository for PostgresStockActivityRepository {
    async fn find_latest_by_warehouse(
        &self,
        tenant_id: &TenantId,
        warehouse_id: &WarehouseId,
    ) -> AppResult<Option<StockActivity>> {
        sqlx::query_as::<_, StockActivityRow>(
            "SELECT id, account_id, warehouse_id, product_id, quantity_change, created_at
             FROM stock_activities
             WHERE account_id = $1 AND warehouse_id = $2
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(tenant_id.0)
        .bind(warehouse_id.0)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|e| {
            AppError::database(format!("Failed to find stock activity by warehouse: {}", e))
        })
    }
}

#[derive(sqlx::FromRow)]
struct StockActivityRow {
    id: uuid::Uuid,
    account_id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    product_id: uuid::Uuid,
    quantity_change: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<StockActivityRow> for StockActivity {
    fn from(row: StockActivityRow) -> Self {
        Self {
            id: row.id,
            account_id: TenantId(row.account_id),
            warehouse_id: WarehouseId(row.warehouse_id),
            product_id: row.product_id,
            quantity_change: row.quantity_change,
            created_at: row.created_at,
        }
    }
}
