//! Synthesis Context - Call Options

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const OPTION_SPEED: &str = "speed";
pub const OPTION_REFER_WAV_PATH: &str = "referWavPath";
pub const OPTION_PROMPT_TEXT: &str = "promptText";

/// 单次调用的参数覆盖
///
/// 未设置的字段回退到静态配置。未识别的键被忽略；
/// `refer_wav_path` / `prompt_text` 作为别名接受。
/// 类型不符的值只丢弃该键（记录 warn），不影响其它覆盖项。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallOptions {
    #[serde(default, deserialize_with = "lenient_float")]
    pub speed: Option<f64>,

    #[serde(
        default,
        rename = "referWavPath",
        alias = "refer_wav_path",
        deserialize_with = "lenient_string"
    )]
    pub refer_wav_path: Option<String>,

    #[serde(
        default,
        rename = "promptText",
        alias = "prompt_text",
        deserialize_with = "lenient_string"
    )]
    pub prompt_text: Option<String>,
}

/// 数字或数字字符串（如 `"1.5"`）
fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let speed = match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                tracing::warn!(value = %s, "Dropping non-numeric speed option");
                None
            }
        },
        Some(other) => {
            tracing::warn!(value = %other, "Dropping non-numeric speed option");
            None
        }
    };
    Ok(speed)
}

/// 字符串原样保留，数字/布尔转成文本
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            tracing::warn!(value = %other, "Dropping non-text option value");
            None
        }
    };
    Ok(text)
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从宿主传入的键值映射解析
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_refer_wav_path(mut self, path: impl Into<String>) -> Self {
        self.refer_wav_path = Some(path.into());
        self
    }

    pub fn with_prompt_text(mut self, text: impl Into<String>) -> Self {
        self.prompt_text = Some(text.into());
        self
    }
}
