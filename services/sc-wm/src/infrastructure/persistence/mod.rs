mod postgres_stock_activity_repository;
mod postgres_stock_repository;
mod postgres_warehouse_repository;

pub use postgres_stock_activity_repository::*;
pub use postgres_stock_repository::*;
pub use postgres_warehouse_repository::*;
