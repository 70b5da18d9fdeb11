//! Synthesis Context - Request
//!
//! 由静态配置 + CallOptions + 输入文本构建 GPT-SoVITS 查询参数

use reqwest::Url;

use super::{CallOptions, SynthesisError};
use crate::config::SovitsConfig;

/// 固定采样步数
pub const SAMPLE_STEPS: u32 = 32;
/// 关闭超分
pub const IF_SR: &str = "false";

/// 拼接参考音频路径
///
/// 设置了非空 base 时，去掉 base 尾部和文件名头部的 `/`，以单个 `/` 连接；
/// 否则原样返回。
pub fn join_refer_wav_path(base: Option<&str>, refer_wav_path: &str) -> String {
    match base {
        Some(base) if !base.is_empty() => {
            let clean_base = base.trim_end_matches('/');
            let clean_file = refer_wav_path.trim_start_matches('/');
            format!("{}/{}", clean_base, clean_file)
        }
        _ => refer_wav_path.to_string(),
    }
}

/// 浮点参数格式化，整数值保留一位小数（`2.0` 而不是 `2`）
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// 单次合成请求
///
/// 每次调用新建，不持久化
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// 最终参考音频路径
    pub refer_wav_path: String,
    /// 有序查询参数
    pub params: Vec<(&'static str, String)>,
}

impl SynthesisRequest {
    pub fn build(
        config: &SovitsConfig,
        text: &str,
        language: &str,
        options: &CallOptions,
    ) -> Self {
        let refer_wav_path = options
            .refer_wav_path
            .as_deref()
            .unwrap_or(&config.refer_wav_path);
        let prompt_text = options
            .prompt_text
            .as_deref()
            .unwrap_or(&config.prompt_text);
        let refer_wav_path =
            join_refer_wav_path(config.sample_audio_base_path.as_deref(), refer_wav_path);
        let speed = options.speed.unwrap_or(config.speed);

        let params = vec![
            ("refer_wav_path", refer_wav_path.clone()),
            ("prompt_text", prompt_text.to_string()),
            ("prompt_language", config.prompt_language.clone()),
            ("text", text.to_string()),
            ("text_language", language.to_string()),
            ("top_k", config.top_k.to_string()),
            ("top_p", format_float(config.top_p)),
            ("temperature", format_float(config.temperature)),
            ("speed", format_float(speed)),
            ("sample_steps", SAMPLE_STEPS.to_string()),
            ("if_sr", IF_SR.to_string()),
        ];

        Self {
            refer_wav_path,
            params,
        }
    }

    /// 按名称取参数值
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 生成完整请求 URL（UTF-8 + form 编码查询串）
    pub fn url(&self, base_url: &str) -> Result<Url, SynthesisError> {
        Url::parse_with_params(base_url, &self.params)
            .map_err(|e| SynthesisError::InvalidRequest(format!("{}: {}", base_url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SovitsConfig {
        SovitsConfig::new("127.0.0.1", "/data/ref.wav", "参考文本")
    }

    #[test]
    fn test_join_with_base_path() {
        assert_eq!(
            join_refer_wav_path(Some("http://cdn/samples/"), "/voice1.wav"),
            "http://cdn/samples/voice1.wav"
        );
        assert_eq!(
            join_refer_wav_path(Some("http://cdn/samples"), "voice1.wav"),
            "http://cdn/samples/voice1.wav"
        );
        assert_eq!(
            join_refer_wav_path(Some("/srv/voices//"), "//voice1.wav"),
            "/srv/voices/voice1.wav"
        );
    }

    #[test]
    fn test_join_without_base_path_is_verbatim() {
        assert_eq!(join_refer_wav_path(None, "/voice1.wav"), "/voice1.wav");
        assert_eq!(join_refer_wav_path(Some(""), "/voice1.wav"), "/voice1.wav");
    }

    #[test]
    fn test_build_uses_static_defaults() {
        let request = SynthesisRequest::build(&config(), "hello", "en", &CallOptions::new());

        let names: Vec<_> = request.params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "refer_wav_path",
                "prompt_text",
                "prompt_language",
                "text",
                "text_language",
                "top_k",
                "top_p",
                "temperature",
                "speed",
                "sample_steps",
                "if_sr",
            ]
        );
        assert_eq!(request.param("refer_wav_path"), Some("/data/ref.wav"));
        assert_eq!(request.param("prompt_text"), Some("参考文本"));
        assert_eq!(request.param("prompt_language"), Some("zh"));
        assert_eq!(request.param("text"), Some("hello"));
        assert_eq!(request.param("text_language"), Some("en"));
        assert_eq!(request.param("top_k"), Some("15"));
        assert_eq!(request.param("top_p"), Some("1.0"));
        assert_eq!(request.param("speed"), Some("1.0"));
        assert_eq!(request.param("sample_steps"), Some("32"));
        assert_eq!(request.param("if_sr"), Some("false"));
    }

    #[test]
    fn test_build_option_overrides() {
        let options = CallOptions::new()
            .with_speed(2.0)
            .with_refer_wav_path("/voice2.wav")
            .with_prompt_text("override");
        let config = config().with_sample_audio_base_path("http://cdn/samples/");

        let request = SynthesisRequest::build(&config, "hi", "ja", &options);
        assert_eq!(request.param("speed"), Some("2.0"));
        assert_eq!(request.param("prompt_text"), Some("override"));
        assert_eq!(request.refer_wav_path, "http://cdn/samples/voice2.wav");
        assert_eq!(
            request.param("refer_wav_path"),
            Some("http://cdn/samples/voice2.wav")
        );
    }

    #[test]
    fn test_fractional_float_formatting() {
        let mut config = config();
        config.top_p = 0.85;
        let request =
            SynthesisRequest::build(&config, "x", "zh", &CallOptions::new().with_speed(1.25));
        assert_eq!(request.param("top_p"), Some("0.85"));
        assert_eq!(request.param("speed"), Some("1.25"));
    }

    #[test]
    fn test_url_encodes_query() {
        let config = config().with_port(9880);
        let request = SynthesisRequest::build(&config, "你好 世界", "zh", &CallOptions::new());
        let url = request.url(&config.base_url()).unwrap();

        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(9880));
        assert_eq!(url.path(), "/");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("text".to_string(), "你好 世界".to_string())));
        assert!(pairs.contains(&("sample_steps".to_string(), "32".to_string())));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_url_rejects_invalid_host() {
        let config = SovitsConfig::new("bad host", "ref.wav", "p");
        let request = SynthesisRequest::build(&config, "x", "zh", &CallOptions::new());
        assert!(matches!(
            request.url(&config.base_url()),
            Err(SynthesisError::InvalidRequest(_))
        ));
    }
}
