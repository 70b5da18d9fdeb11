//! sovits-tts - GPT-SoVITS 语音合成适配器
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: 请求构建、参数覆盖、结果归一
//!
//! 应用层 (application/):
//! - Ports: TtsProvider（宿主能力接口）、SynthesisLogger（注入式日志）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: GPT-SoVITS HTTP Client
//! - Logging: tracing 初始化

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::TtsProvider;
pub use config::{load_config, AppConfig, SovitsConfig};
pub use domain::{CallOptions, SynthesisResult};
pub use infrastructure::SovitsTtsClient;
