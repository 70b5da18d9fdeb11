//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "SOVITS_TTS";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SOVITS_TTS_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SOVITS_TTS_SOVITS__HOST=192.168.1.10`
/// - `SOVITS_TTS_SOVITS__PORT=9880`
/// - `SOVITS_TTS_SOVITS__REFER_WAV_PATH=/data/ref.wav`
/// - `SOVITS_TTS_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("sovits.port", DEFAULT_PORT as i64)?
        .set_default("sovits.prompt_language", "zh")?
        .set_default("sovits.text_language", "zh")?
        .set_default("sovits.top_k", 15)?
        .set_default("sovits.top_p", 1.0)?
        .set_default("sovits.temperature", 1.0)?
        .set_default("sovits.speed", 1.0)?
        .set_default("sovits.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SOVITS_TTS_SOVITS__HOST=tts-server
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let sovits = &config.sovits;

    if sovits.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "sovits.host is required".to_string(),
        ));
    }

    if sovits.refer_wav_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "sovits.refer_wav_path is required".to_string(),
        ));
    }

    if sovits.prompt_text.is_empty() {
        return Err(ConfigError::ValidationError(
            "sovits.prompt_text is required".to_string(),
        ));
    }

    if sovits.port == 0 {
        return Err(ConfigError::ValidationError(
            "sovits.port cannot be 0".to_string(),
        ));
    }

    if sovits.top_k == 0 {
        return Err(ConfigError::ValidationError(
            "sovits.top_k must be a positive integer".to_string(),
        ));
    }

    if sovits.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "sovits.timeout_secs cannot be 0".to_string(),
        ));
    }

    for (name, value) in [
        ("top_p", sovits.top_p),
        ("temperature", sovits.temperature),
        ("speed", sovits.speed),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "sovits.{} must be a finite number",
                name
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let sovits = &config.sovits;
    tracing::info!("=== GPT-SoVITS Configuration ===");
    tracing::info!("Server: {}", sovits.base_url());
    tracing::info!("Refer WAV: {}", sovits.refer_wav_path);
    if let Some(base) = &sovits.sample_audio_base_path {
        tracing::info!("Sample Audio Base Path: {}", base);
    }
    tracing::info!(
        "Languages: prompt={}, text={}",
        sovits.prompt_language,
        sovits.text_language
    );
    tracing::info!(
        "Sampling: top_k={}, top_p={}, temperature={}, speed={}",
        sovits.top_k,
        sovits.top_p,
        sovits.temperature,
        sovits.speed
    );
    tracing::info!("Timeout: {}s", sovits.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("================================");
}
