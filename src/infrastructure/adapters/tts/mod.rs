//! TTS Adapter - GPT-SoVITS HTTP 客户端实现

mod sovits_tts_client;

pub use sovits_tts_client::{SovitsTtsClient, PROVIDER_NAME};
