//! Application Ports - 端口定义
//!
//! 定义宿主与基础设施层之间的抽象接口

mod logger;
mod tts_provider;

pub use logger::SynthesisLogger;
pub use tts_provider::TtsProvider;
