//! 跑局挂具 - 把控制核心接到物理模型上
//!
//! [`SimRunner`] 扮演宿主：跑局开始时触发
//! [`Autopilot::on_run_start`]，此后每 tick 构造世界快照、调用
//! [`Autopilot::tick`]、把跳跃信号下发给 [`PlayerBody`]，再推进物理
//! 并做包围盒判死。步进顺序与真实宿主的更新回调一致：先控制，后物理。
//!
//! [`Autopilot::on_run_start`]: dashbot_core::Autopilot::on_run_start
//! [`Autopilot::tick`]: dashbot_core::Autopilot::tick

use serde::Serialize;
use tracing::{info, trace};

use dashbot_core::{Autopilot, ControlError, RunConfig, Tuning, WorldObject, WorldSnapshot};

use crate::course::Course;
use crate::physics::{PlayerBody, SCROLL_SPEED};

/// 名义 tick 率（Hz）
pub const TICK_RATE_HZ: f32 = 60.0;

/// 单步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// 跑局继续
    Running,
    /// 越过终点线
    Finished,
    /// 撞上危险物
    Dead,
}

/// 跑局结果汇总
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunOutcome {
    pub finished: bool,
    /// 死亡位置；完赛或超时则为 `None`
    pub death_x: Option<f32>,
    pub ticks: u64,
    /// 下发过的按下次数（按键沿计数）
    pub jumps: u64,
}

/// 跑局挂具
pub struct SimRunner {
    course: Course,
    objects: Vec<WorldObject>,
    pilot: Autopilot,
    config: RunConfig,
    body: PlayerBody,
    ticks: u64,
    jumps: u64,
    /// tick 数上限，防止失败配置下的死循环
    max_ticks: u64,
}

impl SimRunner {
    /// 以默认调参创建并武装跑局
    pub fn new(course: Course, config: RunConfig) -> Self {
        // 默认调参恒合法
        Self::with_tuning(course, config, &Tuning::default())
            .expect("default tuning always validates")
    }

    /// 以外部调参表创建（先校验）
    pub fn with_tuning(
        course: Course,
        config: RunConfig,
        tuning: &Tuning,
    ) -> Result<Self, ControlError> {
        let pilot = Autopilot::with_tuning(tuning)?;
        let objects = course.world_objects();
        let body = PlayerBody::spawn(course.mode, course.ground_level);
        let max_ticks = (course.length / SCROLL_SPEED * TICK_RATE_HZ) as u64 * 3 + 600;

        let mut runner = Self {
            course,
            objects,
            pilot,
            config,
            body,
            ticks: 0,
            jumps: 0,
            max_ticks,
        };
        runner.arm();
        Ok(runner)
    }

    /// 跑局开始：重置角色与控制器状态
    fn arm(&mut self) {
        self.body = PlayerBody::spawn(self.course.mode, self.course.ground_level);
        self.pilot.on_run_start(self.course.ground_level);
        self.ticks = 0;
        self.jumps = 0;
    }

    /// 推进一个 tick：控制 → 物理 → 判死/判胜
    pub fn step(&mut self) -> StepResult {
        if !self.body.alive {
            return StepResult::Dead;
        }
        if self.body.x >= self.course.length {
            return StepResult::Finished;
        }

        // 1. 控制：快照进，信号出
        let snapshot = WorldSnapshot {
            objects: &self.objects,
            player: Some(self.body.snapshot()),
        };
        let signal = self.pilot.tick(Some(&snapshot), &self.config);

        let was_held = self.body.held();
        self.body.apply(signal);
        if self.body.held() && !was_held {
            self.jumps += 1;
        }

        // 2. 物理
        self.body.step(1.0 / TICK_RATE_HZ);
        self.ticks += 1;

        // 3. 判死：碰撞盒与任一危险物重叠
        let hitbox = self.body.hitbox();
        for obj in &self.objects {
            if obj.kind.is_hazard() && hitbox.overlaps(&obj.bounds) {
                self.body.alive = false;
                trace!(x = self.body.x, "player died");
                return StepResult::Dead;
            }
        }

        if self.body.x >= self.course.length {
            StepResult::Finished
        } else {
            StepResult::Running
        }
    }

    /// 跑到完赛、死亡或 tick 上限
    pub fn run(&mut self) -> RunOutcome {
        loop {
            match self.step() {
                StepResult::Running => {
                    if self.ticks >= self.max_ticks {
                        info!(ticks = self.ticks, "run aborted: tick cap reached");
                        return self.outcome();
                    }
                },
                StepResult::Finished | StepResult::Dead => {
                    let outcome = self.outcome();
                    info!(
                        course = %self.course.name,
                        finished = outcome.finished,
                        death_x = ?outcome.death_x,
                        ticks = outcome.ticks,
                        jumps = outcome.jumps,
                        "run complete"
                    );
                    return outcome;
                },
            }
        }
    }

    /// 当前时刻的结果汇总（跑局结束后调用）
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            finished: self.body.alive && self.body.x >= self.course.length,
            death_x: if self.body.alive { None } else { Some(self.body.x) },
            ticks: self.ticks,
            jumps: self.jumps,
        }
    }

    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn pilot(&self) -> &Autopilot {
        &self.pilot
    }
}
