//! 跑局命令
//!
//! 加载（或生成）课程，把自动驾驶接上模拟挂具跑完一局。
//! `--realtime` 用绝对时间锚点 + spin_sleep 把 tick 锁在名义频率上，
//! 并响应 Ctrl+C 中途放弃。

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use tracing::{info, warn};

use dashbot_core::Tuning;
use dashbot_sim::{Course, CourseMode, GenerateParams, SimRunner, StepResult, TICK_RATE_HZ};

use crate::commands::config::CliConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Cube,
    Ship,
    Dart,
}

impl From<ModeArg> for CourseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Cube => CourseMode::Cube,
            ModeArg::Ship => CourseMode::Ship,
            ModeArg::Dart => CourseMode::Dart,
        }
    }
}

/// 跑局参数
#[derive(Args, Debug)]
pub struct RunCommand {
    /// 课程文件（TOML）；省略时按种子生成
    #[arg(long, conflicts_with_all = ["seed", "mode", "length"])]
    pub course: Option<PathBuf>,

    /// 生成种子
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// 生成课程的运动模式
    #[arg(long, value_enum, default_value = "cube")]
    pub mode: ModeArg,

    /// 生成课程的长度
    #[arg(long, default_value_t = 5000.0)]
    pub length: f32,

    /// 调参表文件（TOML）；省略时用默认调参
    #[arg(long)]
    pub tuning: Option<PathBuf>,

    /// 本次跑局强制打开总开关（不落盘）
    #[arg(long)]
    pub enable: bool,

    /// 按名义 tick 率实时节拍（默认全速离线跑）
    #[arg(long)]
    pub realtime: bool,

    /// 以 JSON 输出跑局结果
    #[arg(long)]
    pub json: bool,
}

impl RunCommand {
    pub fn execute(self) -> Result<()> {
        let course = match &self.course {
            Some(path) => Course::load(path)
                .with_context(|| format!("failed to load course {}", path.display()))?,
            None => Course::generate(&GenerateParams {
                seed: self.seed,
                mode: self.mode.into(),
                length: self.length,
                ..Default::default()
            }),
        };

        let tuning = match &self.tuning {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read tuning {}", path.display()))?;
                let tuning: Tuning =
                    toml::from_str(&content).context("failed to parse tuning file")?;
                tuning.validate().context("invalid tuning")?;
                tuning
            },
            None => Tuning::default(),
        };

        let mut config = CliConfig::load()?.run;
        if self.enable {
            config.master_enabled = true;
        }
        if !config.master_enabled {
            warn!(
                "autopilot master switch is off; the player will not act. \
                 Pass --enable or run `dashbot-cli config set --master true`."
            );
        }

        info!(course = %course.name, mode = ?course.mode, "starting run");

        let mut runner = SimRunner::with_tuning(course, config, &tuning)?;
        let outcome = if self.realtime {
            run_realtime(&mut runner)?
        } else {
            runner.run()
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else if outcome.finished {
            println!(
                "✅ finished in {} ticks ({} jumps)",
                outcome.ticks, outcome.jumps
            );
        } else if let Some(x) = outcome.death_x {
            println!(
                "💥 died at x = {x:.1} after {} ticks ({} jumps)",
                outcome.ticks, outcome.jumps
            );
        } else {
            bail!("run aborted before completion");
        }

        Ok(())
    }
}

/// 实时节拍跑局
///
/// 绝对时间锚点消除累积漂移：无论单步耗时多少，频率都锁在
/// [`TICK_RATE_HZ`]。超时（Overrun）时跳过睡眠直接追赶。
fn run_realtime(runner: &mut SimRunner) -> Result<dashbot_sim::RunOutcome> {
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl+C handler")?;
    }

    let period = Duration::from_secs_f64(1.0 / TICK_RATE_HZ as f64);
    let mut next_tick = Instant::now();

    loop {
        if stop.load(Ordering::SeqCst) {
            warn!("interrupted, aborting run");
            bail!("run interrupted");
        }

        match runner.step() {
            StepResult::Running => {},
            StepResult::Finished | StepResult::Dead => break,
        }

        // 设定下一个锚点并睡到那里
        next_tick += period;
        let now = Instant::now();
        if next_tick > now {
            spin_sleep::sleep(next_tick - now);
        } else {
            // 任务超时：重置锚点，避免后续累积延迟
            next_tick = now;
        }
    }

    Ok(runner.outcome())
}
