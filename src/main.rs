//! Voxgate - 文本转语音代理

use std::sync::Arc;

use voxgate::config::{load_config, load_dotenv, print_config, LogConfig};
use voxgate::infrastructure::adapters::{ElevenLabsClient, ElevenLabsClientConfig};
use voxgate::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},voxgate={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let dotenv_path = load_dotenv();
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    match &dotenv_path {
        Some(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        None => tracing::debug!("No .env file found"),
    }

    tracing::info!("Voxgate TTS backend v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let tts_engine = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig::new(
        config.tts.base_url.clone(),
    ))?);

    let state = AppState::new(tts_engine, config.tts.api_key());
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
