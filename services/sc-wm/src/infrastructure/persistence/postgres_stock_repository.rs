//! PostgreSQL 库存查询实现

use async_trait::async_trait;
use invena_common::TenantId;
use invena_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::repositories::StockRepository;
use crate::domain::stock::StockItem;
use crate::domain::warehouse::WarehouseId;

pub struct PostgresStockRepository {
    pool: PgPool,
}

impl PostgresStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for PostgresStockRepository {
    async fn find_by_warehouse(
        &self,
        tenant_id: &TenantId,
        warehouse_id: &WarehouseId,
    ) -> AppResult<Vec<StockItem>> {
        sqlx::query_as::<_, StockRow>(
            "SELECT id, account_id, warehouse_id, product_id, quantity
             FROM stocks WHERE account_id = $1 AND warehouse_id = $2",
        )
        .bind(tenant_id.0)
        .bind(warehouse_id.0)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(Into::into).collect())
        .map_err(|e| AppError::database(format!("Failed to find stocks by warehouse: {}", e)))
    }
}

#[derive(sqlx::FromRow)]
struct StockRow {
    id: uuid::Uuid,
    account_id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    product_id: uuid::Uuid,
    quantity: i64,
}

impl From<StockRow> for StockItem {
    fn from(row: StockRow) -> Self {
        Self {
            id: row.id,
            account_id: TenantId(row.account_id),
            warehouse_id: WarehouseId(row.warehouse_id),
            product_id: row.product_id,
            quantity: row.quantity,
        }
    }
}
