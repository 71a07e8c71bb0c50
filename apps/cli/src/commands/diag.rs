//! 诊断命令
//!
//! 校验当前调参与开关配置，报告求解器就绪状态。不产生任何副作用。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dashbot_core::Tuning;

use crate::commands::config::CliConfig;

/// 诊断参数
#[derive(Args, Debug)]
pub struct DiagCommand {
    /// 调参表文件（TOML）；省略时校验默认调参
    #[arg(long)]
    pub tuning: Option<PathBuf>,
}

impl DiagCommand {
    pub fn execute(self) -> Result<()> {
        let tuning = match &self.tuning {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read tuning {}", path.display()))?;
                toml::from_str::<Tuning>(&content).context("failed to parse tuning file")?
            },
            None => Tuning::default(),
        };
        tuning.validate().context("invalid tuning")?;

        let config = CliConfig::load()?;

        println!("solver diagnostics");
        println!("  sense window     : {:.1}", tuning.sense_window);
        println!("  engage distance  : {:.1}", tuning.engage_distance);
        println!("  clearance        : {:.1}", tuning.clearance);
        println!("  smoothing        : {:.2}", tuning.smoothing);
        println!(
            "  pid gains        : kp={} ki={} kd={} trigger={}",
            tuning.pid.kp, tuning.pid.ki, tuning.pid.kd, tuning.pid.trigger
        );
        println!("  master enabled   : {}", config.run.master_enabled);
        println!();
        println!("Target path solver ready for playback.");

        Ok(())
    }
}
