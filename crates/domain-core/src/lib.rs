//! invena-domain-core - 领域模型基础

mod entity;

pub use entity::*;
