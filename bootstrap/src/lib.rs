//! invena-bootstrap - 服务启动支撑
//!
//! 基础设施资源的统一构造：组合根在这里创建连接池等资源，
//! 再以类型化构造参数注入各组件

mod infrastructure;
mod retry;
mod shutdown;

pub use infrastructure::*;
pub use retry::*;
pub use shutdown::*;
