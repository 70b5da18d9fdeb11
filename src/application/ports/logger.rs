//! Logger Port - 注入式日志能力
//!
//! adapter 通过该接口输出诊断信息，默认实现转发到 tracing

/// 合成诊断日志
pub trait SynthesisLogger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
