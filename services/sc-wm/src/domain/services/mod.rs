mod warehouse_service;

pub use warehouse_service::*;
