//! Synthesis Context - Errors

use thiserror::Error;

/// 单次合成过程中的失败分类
///
/// 只在 adapter 内部流转，最终统一归一为 `SynthesisResult::Absent`。
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 远端返回非 200 状态
    #[error("Error from GPT-SoVITS API: {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("Timeout connecting to GPT-SoVITS API at {url}")]
    Timeout { url: String },

    /// 连接、DNS、协议等传输层错误
    #[error("GPT-SoVITS client error: {0}")]
    NetworkError(String),

    /// 请求无法构建（如 host 非法）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SynthesisError {
    /// 是否为远端拒绝（非 200）
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// 是否为传输层失败（含超时）
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::NetworkError(_))
    }
}
