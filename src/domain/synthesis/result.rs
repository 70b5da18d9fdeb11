//! Synthesis Context - Result

/// 音频格式标签
pub const WAV_FORMAT: &str = "wav";

/// 合成结果
///
/// 成功时为完整缓冲的音频字节，任何失败统一为 `Absent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisResult {
    Audio { format: &'static str, data: Vec<u8> },
    Absent,
}

impl SynthesisResult {
    pub fn wav(data: Vec<u8>) -> Self {
        Self::Audio {
            format: WAV_FORMAT,
            data,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn format(&self) -> Option<&'static str> {
        match self {
            Self::Audio { format, .. } => Some(format),
            Self::Absent => None,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::Audio { data, .. } => Some(data),
            Self::Absent => None,
        }
    }

    /// 拆成 `(format, data)`，`Absent` 对应 `(None, None)`
    pub fn into_parts(self) -> (Option<&'static str>, Option<Vec<u8>>) {
        match self {
            Self::Audio { format, data } => (Some(format), Some(data)),
            Self::Absent => (None, None),
        }
    }
}
