//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod logging;

pub use adapters::SovitsTtsClient;
pub use logging::{init_tracing, TracingLogger};
