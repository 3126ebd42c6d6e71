mod stock_activity_repository;
mod stock_repository;
mod warehouse_repository;

pub use stock_activity_repository::*;
pub use stock_repository::*;
pub use warehouse_repository::*;
