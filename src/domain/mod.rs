//! Domain Layer - 领域层
//!
//! Synthesis Context: 请求构建、参数覆盖、结果与错误分类

pub mod synthesis;

pub use synthesis::{CallOptions, SynthesisError, SynthesisRequest, SynthesisResult};
