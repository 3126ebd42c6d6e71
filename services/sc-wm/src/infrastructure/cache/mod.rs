mod warehouse_cache;

pub use warehouse_cache::*;
