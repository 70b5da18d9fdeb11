//! GPT-SoVITS TTS Client - 调用自托管 GPT-SoVITS 推理服务
//!
//! 实现 TtsProvider trait，通过 HTTP GET 调用远端服务
//!
//! 外部 TTS API:
//! GET http://{host}:{port}/?refer_wav_path=...&prompt_text=...&text=...
//! Response: 200 audio/wav binary, 其他状态码的 body 为错误文本

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::ports::{SynthesisLogger, TtsProvider};
use crate::config::SovitsConfig;
use crate::domain::synthesis::{
    CallOptions, SynthesisError, SynthesisRequest, SynthesisResult, OPTION_PROMPT_TEXT,
    OPTION_REFER_WAV_PATH, OPTION_SPEED,
};
use crate::infrastructure::logging::TracingLogger;

/// 提供者名称
pub const PROVIDER_NAME: &str = "GPT-SoVITS";

/// 静态声明的支持语言
const SUPPORTED_LANGUAGES: [&str; 3] = ["zh", "en", "ja"];

/// GPT-SoVITS 客户端
///
/// 配置在构建后不可变，`Client` 内部连接池可并发复用
pub struct SovitsTtsClient {
    client: Client,
    config: SovitsConfig,
    logger: Arc<dyn SynthesisLogger>,
}

impl SovitsTtsClient {
    /// 创建新的客户端（独立连接池，tracing 日志）
    pub fn new(config: SovitsConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self::with_client(client, config, Arc::new(TracingLogger)))
    }

    /// 使用宿主提供的共享 `Client` 和日志实现
    pub fn with_client(
        client: Client,
        config: SovitsConfig,
        logger: Arc<dyn SynthesisLogger>,
    ) -> Self {
        Self {
            client,
            config,
            logger,
        }
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SynthesisError {
        if err.is_timeout() {
            SynthesisError::Timeout {
                url: self.config.base_url(),
            }
        } else if err.is_connect() {
            SynthesisError::NetworkError(format!("Cannot connect to GPT-SoVITS service: {}", err))
        } else {
            SynthesisError::NetworkError(err.to_string())
        }
    }

    /// 发送请求并读取完整音频
    async fn fetch_audio(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        let url = request.url(&self.config.base_url())?;

        self.logger.debug(&format!(
            "Requesting TTS. Final Refer WAV: {}. Full URL: {}",
            request.refer_wav_path, url
        ));

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        self.logger
            .info("Successfully received audio stream from GPT-SoVITS.");

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.map_transport_error(e)
                } else {
                    SynthesisError::InvalidResponse(format!("Failed to read audio: {}", e))
                }
            })?
            .to_vec();

        if audio_data.is_empty() {
            return Err(SynthesisError::InvalidResponse(
                "Empty audio body".to_string(),
            ));
        }

        Ok(audio_data)
    }
}

#[async_trait]
impl TtsProvider for SovitsTtsClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn default_language(&self) -> &str {
        &self.config.text_language
    }

    fn supported_languages(&self) -> BTreeSet<&'static str> {
        SUPPORTED_LANGUAGES.into_iter().collect()
    }

    fn default_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert(OPTION_SPEED.to_string(), Value::from(self.config.speed));
        options
    }

    fn supported_options(&self) -> BTreeSet<&'static str> {
        [OPTION_SPEED, OPTION_REFER_WAV_PATH, OPTION_PROMPT_TEXT]
            .into_iter()
            .collect()
    }

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        options: &CallOptions,
    ) -> SynthesisResult {
        let span = tracing::info_span!(
            "sovits_synthesize",
            request_id = %Uuid::new_v4(),
            text_len = text.len(),
            language = %language,
        );

        async {
            let request = SynthesisRequest::build(&self.config, text, language, options);

            match self.fetch_audio(&request).await {
                Ok(audio_data) => {
                    tracing::debug!(audio_size = audio_data.len(), "TTS synthesis completed");
                    SynthesisResult::wav(audio_data)
                }
                Err(err) => {
                    let message = if err.is_rejection() || err.is_transport() {
                        err.to_string()
                    } else {
                        format!("Unknown error occurred: {}", err)
                    };
                    self.logger.error(&message);
                    SynthesisResult::Absent
                }
            }
        }
        .instrument(span)
        .await
    }
}
