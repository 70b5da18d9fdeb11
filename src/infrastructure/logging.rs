//! Logging - tracing 初始化与默认日志实现

use tracing_subscriber::EnvFilter;

use crate::application::ports::SynthesisLogger;
use crate::config::LogConfig;

/// 转发到 tracing 的默认日志实现
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl SynthesisLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// 初始化全局 tracing subscriber
///
/// `RUST_LOG` 优先于配置中的日志级别
pub fn init_tracing(config: &LogConfig) {
    let log_filter = format!("{},sovits_tts={}", config.level, config.level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
