//! TTS Provider Port - 宿主侧语音提供者抽象
//!
//! 宿主只依赖这组能力，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::domain::{CallOptions, SynthesisResult};

/// TTS Provider Port
///
/// 所有实现必须是无共享可变状态的，可被宿主并发调用
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// 提供者显示名称
    fn name(&self) -> &str;

    /// 默认合成语言
    fn default_language(&self) -> &str;

    /// 支持的语言（静态声明，不向远端校验）
    fn supported_languages(&self) -> BTreeSet<&'static str>;

    /// 默认选项
    fn default_options(&self) -> Map<String, Value>;

    /// 支持的选项键
    fn supported_options(&self) -> BTreeSet<&'static str>;

    /// 合成语音
    ///
    /// 全函数：任何失败都返回 `SynthesisResult::Absent`，不会 panic 或返回错误
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        options: &CallOptions,
    ) -> SynthesisResult;
}
