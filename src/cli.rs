//! 命令行入口
//!
//! - `evaluate <FILES...>` - 评估 PDF 文件（目录会展开为其中的 PDF）
//! - `serve` - 启动 HTTP 上传界面

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use pitch_deck_analyzer::models::collect_uploads;
use pitch_deck_analyzer::utils::logging::log_startup;
use pitch_deck_analyzer::{logger, server, BatchProcessor, Config};

#[derive(Parser, Debug)]
#[command(
    name = "pitch-deck-analyzer",
    version,
    about = "Upload one or more PDF pitch decks to get detailed startup evaluations and insights."
)]
pub struct Cli {
    /// TOML 配置文件（环境变量优先）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 评估一个或多个 PDF 文件，依次输出评估结果和调试信息
    Evaluate {
        /// PDF 文件或包含 PDF 的目录
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// 启动 HTTP 上传界面
    Serve {
        /// 监听地址，默认取配置中的 server_addr
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    /// 返回 false 表示批次失败（用于设置退出码）
    pub async fn run(self) -> Result<bool> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_env(),
        };
        config.verbose_logging |= self.verbose;

        logger::init(config.verbose_logging);
        log_startup(&config);

        match self.command {
            Commands::Evaluate { files } => run_evaluate(&config, &files).await,
            Commands::Serve { addr } => {
                let addr = addr.unwrap_or_else(|| config.server_addr.clone());
                let processor = Arc::new(BatchProcessor::from_config(&config));
                server::start_server(processor, &addr).await?;
                Ok(true)
            }
        }
    }
}

async fn run_evaluate(config: &Config, paths: &[PathBuf]) -> Result<bool> {
    let uploads = collect_uploads(paths).await?;
    if uploads.is_empty() {
        warn!("⚠️ 没有找到待处理的 PDF 文件，程序结束");
        return Ok(true);
    }

    let processor = BatchProcessor::from_config(config);
    let outcome = processor.run(&uploads).await;
    let (report, diagnostics) = outcome.render();

    println!("===== Evaluation Output =====");
    println!("{}", report);
    println!();
    println!("===== Debug Output =====");
    println!("{}", diagnostics);

    Ok(outcome.is_success())
}
