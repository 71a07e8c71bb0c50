//! # Dashbot CLI
//!
//! Command-line front end for the dashbot autopilot.
//!
//! ## One-shot 模式
//!
//! ```bash
//! # 开关管理（落盘到 config.toml）
//! dashbot-cli config set --master true
//!
//! # 跑一条生成课程
//! dashbot-cli run --seed 42 --mode cube
//!
//! # 跑课程文件，实时节拍 + JSON 输出
//! dashbot-cli run --course levels/wall.toml --realtime --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, DiagCommand, RunCommand};

/// Dashbot CLI - 自动驾驶命令行工具
#[derive(Parser, Debug)]
#[command(name = "dashbot-cli")]
#[command(about = "Command-line front end for the dashbot autopilot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 开关配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 在课程上跑一局自动驾驶
    Run {
        #[command(flatten)]
        args: RunCommand,
    },

    /// 诊断：校验调参并报告就绪状态
    Diag {
        #[command(flatten)]
        args: DiagCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dashbot_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config(cmd) => cmd.execute(),

        Commands::Run { args } => args.execute(),

        Commands::Diag { args } => args.execute(),
    }
}
