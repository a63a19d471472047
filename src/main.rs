use notojo::utils::{logger, validation::Validate};
use notojo::{DigestPipeline, EnvConfig, SyncEngine, SyncError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a .env next to the binary
    dotenvy::dotenv().ok();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting notojo");

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(SyncError::MissingConfigError { vars }) => {
            eprintln!("❌ Missing required environment variables:");
            for var in &vars {
                eprintln!("   - {}", var);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let pipeline = DigestPipeline::new(config);
    let engine = SyncEngine::new(pipeline);

    match engine.run().await? {
        Some(note_id) => {
            tracing::info!("✅ notojo completed successfully and synced to Joplin.");
            println!("✅ Synced to Joplin (note id: {})", note_id);
        }
        None => {
            println!("ℹ️ Nothing published today.");
        }
    }

    Ok(())
}
