use clap::Parser;

use bookmarker::cli::Cli;
use bookmarker::config::init_config;
use bookmarker::runtime::modes::{self, Mode};
use bookmarker::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if modes::detect_mode(cli.command.as_ref()) == Mode::Cli {
        if let Some(command) = cli.command
            && let Err(e) = modes::run_cli(command).await
        {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = match init_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // 保持 guard 存活，退出时刷新缓冲的日志
    let _log_guard = init_logging(&config.logging)?;

    modes::run_server(&config).await
}
