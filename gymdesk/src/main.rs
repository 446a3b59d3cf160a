use clap::Parser;
use gymdesk::cli::{self, Cli};
use gymdesk::{Config, DashboardService, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env 先于配置加载
    dotenv::dotenv().ok();
    let args = Cli::parse();

    // 2. 环境变量配置 + 命令行覆盖
    let config = args.apply(Config::from_env());

    // 3. 日志
    setup_environment(&config)?;

    // 4. 执行命令
    let service = DashboardService::from_config(&config.client, config.working_days)?;
    let output = match cli::run(&args.command, &service).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            return Err(e);
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
