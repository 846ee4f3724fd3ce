//! # Auth Backend 主程序
//!
//! 项目管理命令行入口

use auth_backend::{
    Result,
    app::AppContext,
    cli::{self, Cli},
    config::{ConfigManager, default_config_path},
    logging,
};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let output = match run(args).await {
        Ok(output) => output,
        Err(e) => {
            error!(error = %e, "命令执行失败");
            eprintln!("error: {}", e.public_message());
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<serde_json::Value> {
    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = ConfigManager::from_file(&config_path)?.into_config();

    let log_level = args.log_level.or_else(|| config.log_level.clone());
    logging::init_logging(log_level.as_deref());
    info!(path = %config_path.display(), "配置加载完成");

    let context = if args.command.needs_migrations() {
        AppContext::initialize(config).await?
    } else {
        AppContext::connect(config).await?
    };

    let result = cli::execute(&context, args.command).await;
    context.shutdown().await?;
    result
}
