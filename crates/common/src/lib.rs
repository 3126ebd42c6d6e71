//! invena-common - 通用类型库

pub mod types;

pub use types::*;
