//! Application Layer - 应用层
//!
//! - Ports: TtsProvider（宿主能力接口）、SynthesisLogger（注入式日志）

pub mod ports;

pub use ports::{SynthesisLogger, TtsProvider};
