//! Synthesis Context - 语音合成上下文
//!
//! 职责:
//! - 单次调用参数覆盖 (CallOptions)
//! - GPT-SoVITS 请求参数构建
//! - 合成结果与错误分类

mod errors;
mod options;
mod request;
mod result;

pub use errors::SynthesisError;
pub use options::{CallOptions, OPTION_PROMPT_TEXT, OPTION_REFER_WAV_PATH, OPTION_SPEED};
pub use request::{join_refer_wav_path, SynthesisRequest, IF_SR, SAMPLE_STEPS};
pub use result::{SynthesisResult, WAV_FORMAT};
