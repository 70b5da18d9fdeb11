//! sovits-tts - 命令行合成工具
//!
//! 加载配置，调用 GPT-SoVITS 合成一段文本并写入 WAV 文件

use clap::Parser;
use std::path::PathBuf;

use sovits_tts::config::{load_config_from_path, print_config};
use sovits_tts::infrastructure::init_tracing;
use sovits_tts::{CallOptions, SovitsTtsClient, SynthesisResult, TtsProvider};

/// Synthesize speech with a GPT-SoVITS server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to synthesize
    text: String,

    /// Text language (defaults to sovits.text_language)
    #[arg(short, long)]
    language: Option<String>,

    /// Output WAV path
    #[arg(short, long, default_value = "output.wav")]
    output: PathBuf,

    /// Configuration file (defaults to config.toml / config.local.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Speech speed override
    #[arg(long)]
    speed: Option<f64>,

    /// Reference audio override
    #[arg(long)]
    refer_wav_path: Option<String>,

    /// Reference transcript override
    #[arg(long)]
    prompt_text: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    let client = SovitsTtsClient::new(config.sovits)?;

    let mut options = CallOptions::new();
    options.speed = cli.speed;
    options.refer_wav_path = cli.refer_wav_path;
    options.prompt_text = cli.prompt_text;

    let language = cli
        .language
        .unwrap_or_else(|| client.default_language().to_string());

    match client.synthesize(&cli.text, &language, &options).await {
        SynthesisResult::Audio { format, data } => {
            tokio::fs::write(&cli.output, &data).await?;
            tracing::info!(
                output = %cli.output.display(),
                format = format,
                audio_size = data.len(),
                "Audio written"
            );
            Ok(())
        }
        SynthesisResult::Absent => anyhow::bail!("GPT-SoVITS returned no audio"),
    }
}
