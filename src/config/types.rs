//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 默认 GPT-SoVITS 端口
pub const DEFAULT_PORT: u16 = 9880;
/// 默认整体请求超时（秒），覆盖连接与响应体传输
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// GPT-SoVITS 服务配置
    #[serde(default)]
    pub sovits: SovitsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// GPT-SoVITS 服务配置
///
/// 在 adapter 生命周期内不可变。`host`、`refer_wav_path`、`prompt_text`
/// 为必填项，由 loader 校验。
#[derive(Debug, Clone, Deserialize)]
pub struct SovitsConfig {
    /// 服务主机名或 IP
    #[serde(default)]
    pub host: String,

    /// 服务端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 参考音频路径（服务端文件路径或 URL 片段）
    #[serde(default)]
    pub refer_wav_path: String,

    /// 参考音频对应的文本
    #[serde(default)]
    pub prompt_text: String,

    /// 参考文本语言
    #[serde(default = "default_language")]
    pub prompt_language: String,

    /// 默认合成语言
    #[serde(default = "default_language")]
    pub text_language: String,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(default = "default_unit")]
    pub top_p: f64,

    #[serde(default = "default_unit")]
    pub temperature: f64,

    /// 默认语速
    #[serde(default = "default_unit")]
    pub speed: f64,

    /// 参考音频基础路径
    /// 设置后 `refer_wav_path` 被视为相对该路径的文件名
    #[serde(default)]
    pub sample_audio_base_path: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_top_k() -> u32 {
    15
}

fn default_unit() -> f64 {
    1.0
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SovitsConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            refer_wav_path: String::new(),
            prompt_text: String::new(),
            prompt_language: default_language(),
            text_language: default_language(),
            top_k: default_top_k(),
            top_p: default_unit(),
            temperature: default_unit(),
            speed: default_unit(),
            sample_audio_base_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl SovitsConfig {
    /// 以三个必填项构造，其余字段取默认值
    pub fn new(
        host: impl Into<String>,
        refer_wav_path: impl Into<String>,
        prompt_text: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            refer_wav_path: refer_wav_path.into(),
            prompt_text: prompt_text.into(),
            ..Default::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_sample_audio_base_path(mut self, base: impl Into<String>) -> Self {
        self.sample_audio_base_path = Some(base.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// 获取服务 Base URL
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sovits.port, 9880);
        assert_eq!(config.sovits.prompt_language, "zh");
        assert_eq!(config.sovits.text_language, "zh");
        assert_eq!(config.sovits.top_k, 15);
        assert_eq!(config.sovits.top_p, 1.0);
        assert_eq!(config.sovits.temperature, 1.0);
        assert_eq!(config.sovits.speed, 1.0);
        assert_eq!(config.sovits.timeout_secs, 300);
        assert!(config.sovits.sample_audio_base_path.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_base_url() {
        let config = SovitsConfig::new("192.168.1.10", "ref.wav", "hello").with_port(9000);
        assert_eq!(config.base_url(), "http://192.168.1.10:9000/");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SovitsConfig = serde_json::from_str(
            r#"{"host": "tts.local", "refer_wav_path": "a.wav", "prompt_text": "hi", "speed": 1.2}"#,
        )
        .unwrap();
        assert_eq!(config.host, "tts.local");
        assert_eq!(config.port, 9880);
        assert_eq!(config.speed, 1.2);
        assert_eq!(config.top_k, 15);
    }
}
