mod tenant_scope;
mod warehouse_title;

pub use tenant_scope::*;
pub use warehouse_title::*;
