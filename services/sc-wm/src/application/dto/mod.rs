mod warehouse_dto;

pub use warehouse_dto::*;
