//! 开关配置管理命令
//!
//! 三个独立布尔开关（总开关 / PID / Raycast）的读-改-写，
//! 落盘为 TOML。任意布尔组合都合法，无需校验。

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use dashbot_core::RunConfig;

/// 配置文件目录
fn config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().context("cannot determine config directory")?;
    path.push("dashbot");
    Ok(path)
}

fn config_file() -> Result<PathBuf> {
    let mut path = config_dir()?;
    fs::create_dir_all(&path).context("failed to create config directory")?;
    path.push("config.toml");
    Ok(path)
}

/// CLI 持久化配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 运行开关
    pub run: RunConfig,
}

impl CliConfig {
    /// 从默认路径加载；文件不存在时返回默认值
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("failed to read config file")?;
        toml::from_str(&content).context("failed to parse config file")
    }

    /// 保存到默认路径
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content).context("failed to write config file")?;
        Ok(())
    }
}

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 设置开关
    Set {
        /// 总开关
        #[arg(long)]
        master: Option<bool>,

        /// 飞船模式 PID 控制器
        #[arg(long)]
        pid: Option<bool>,

        /// 飞镖模式 Raycast 控制器
        #[arg(long)]
        raycast: Option<bool>,
    },

    /// 读取开关
    Get {
        /// 开关名（master / pid / raycast / all）
        #[arg(default_value = "all")]
        key: String,
    },

    /// 检查配置文件
    Check,
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Set { master, pid, raycast } => Self::set_(master, pid, raycast),

            ConfigCommand::Get { key } => Self::get_(key),

            ConfigCommand::Check => Self::check_(),
        }
    }

    fn set_(master: Option<bool>, pid: Option<bool>, raycast: Option<bool>) -> Result<()> {
        let mut config = CliConfig::load()?;

        if let Some(v) = master {
            config.run.master_enabled = v;
            println!("✅ master_enabled = {v}");
        }
        if let Some(v) = pid {
            config.run.pid_enabled = v;
            println!("✅ pid_enabled = {v}");
        }
        if let Some(v) = raycast {
            config.run.raycast_enabled = v;
            println!("✅ raycast_enabled = {v}");
        }

        config.save()?;
        Ok(())
    }

    fn get_(key: String) -> Result<()> {
        let config = CliConfig::load()?;

        match key.as_str() {
            "master" => println!("{}", config.run.master_enabled),
            "pid" => println!("{}", config.run.pid_enabled),
            "raycast" => println!("{}", config.run.raycast_enabled),
            _ => {
                println!("dashbot config:");
                println!("  master_enabled  = {}", config.run.master_enabled);
                println!("  pid_enabled     = {}", config.run.pid_enabled);
                println!("  raycast_enabled = {}", config.run.raycast_enabled);
            },
        }

        Ok(())
    }

    fn check_() -> Result<()> {
        let config = CliConfig::load()?;
        let path = config_file()?;

        println!("config file: {}", path.display());
        println!("  master_enabled  = {}", config.run.master_enabled);
        println!("  pid_enabled     = {}", config.run.pid_enabled);
        println!("  raycast_enabled = {}", config.run.raycast_enabled);

        Ok(())
    }
}
