//! 控制回路驱动器 - 每 tick 一次的编排入口
//!
//! [`Autopilot`] 把传感器、规划器、三个执行器和控制器状态装配到一起，
//! 在宿主的更新周期里每 tick 被调用一次：
//!
//! ```text
//! 世界快照 → 感知 → 规划（更新 target_y）→ 模式解析 → 执行 → 跳跃信号
//! ```
//!
//! # 前置条件检查（每 tick 重新判定）
//!
//! 按顺序检查：总开关开启、快照存在、角色存在且存活。任何一项不满足
//! 时本 tick 静默返回 `None`，**不修改任何状态** —— 这是可恢复的预期
//! 情况（例如关卡切换），不是错误。
//!
//! # 跑局生命周期
//!
//! `Idle → Armed`（[`on_run_start`](Autopilot::on_run_start) 触发状态
//! 重置）`→ Active`（每个满足前置条件的 tick）→ 跑局间隐式回到 Idle。
//! 开关状态每 tick 都重新读取。

use tracing::{debug, info, trace};

use crate::config::RunConfig;
use crate::control::{
    Actuator, ControlMode, GroundActuator, JumpSignal, PidActuator, RaycastActuator,
};
use crate::error::ControlError;
use crate::planner::TrajectoryPlanner;
use crate::sensor::HazardSensor;
use crate::state::ControllerState;
use crate::tuning::Tuning;
use crate::world::{Aabb, WorldSnapshot};

/// 控制回路驱动器
///
/// 进程内应当只存在一个实例；控制器状态与危险物缓冲都由它独占持有，
/// 单写者，tick 之间不跨线程。
pub struct Autopilot {
    sensor: HazardSensor,
    planner: TrajectoryPlanner,
    pid: PidActuator,
    raycast: RaycastActuator,
    ground: GroundActuator,

    /// 跑局开始时的基线偏移（来自调参表）
    baseline_offset: f32,

    /// 跨 tick 的控制器状态
    state: ControllerState,

    /// 危险物缓冲：每 tick 清空重建，复用分配
    hazards: Vec<Aabb>,
}

impl Autopilot {
    /// 以默认调参创建
    pub fn new() -> Self {
        // 默认值恒合法，直接展开
        Self::from_tuning_unchecked(&Tuning::default())
    }

    /// 以外部调参表创建（先校验）
    pub fn with_tuning(tuning: &Tuning) -> Result<Self, ControlError> {
        tuning.validate()?;
        Ok(Self::from_tuning_unchecked(tuning))
    }

    fn from_tuning_unchecked(tuning: &Tuning) -> Self {
        Self {
            sensor: HazardSensor::from_tuning(tuning),
            planner: TrajectoryPlanner::from_tuning(tuning),
            pid: PidActuator::from_gains(tuning.pid),
            raycast: RaycastActuator::new(),
            ground: GroundActuator::from_tuning(tuning),
            baseline_offset: tuning.baseline_offset,
            state: ControllerState::new(0.0),
            hazards: Vec::new(),
        }
    }

    /// 跑局开始钩子
    ///
    /// 宿主在每局开始时调用一次，携带地面参考高度。控制器状态重置到
    /// 基线，危险物缓冲清空。
    pub fn on_run_start(&mut self, ground_level: f32) {
        self.state.reset(ground_level, self.baseline_offset);
        self.hazards.clear();
        info!(
            ground_level,
            target_y = self.state.target_y,
            "run start: controller state reset"
        );
    }

    /// 每模拟 tick 调用一次
    ///
    /// # 参数
    ///
    /// - `snapshot`: 本 tick 的世界视图；`None` 表示世界缺失（关卡切换等）
    /// - `config`: 运行开关，只读
    ///
    /// # 返回
    ///
    /// - `Some(signal)`: 通过宿主的输入通道下发按下/松开
    /// - `None`: 本 tick 无操作（前置条件不满足，或信号被执行器扣留）
    pub fn tick(
        &mut self,
        snapshot: Option<&WorldSnapshot<'_>>,
        config: &RunConfig,
    ) -> Option<JumpSignal> {
        if !config.master_enabled {
            return None;
        }

        let Some(snapshot) = snapshot else {
            trace!("tick skipped: world snapshot absent");
            return None;
        };

        let Some(player) = snapshot.player else {
            trace!("tick skipped: player absent");
            return None;
        };

        if !player.alive {
            trace!("tick skipped: player dead");
            return None;
        }

        // 1. 感知：重建危险物缓冲
        self.sensor.scan_into(snapshot.objects, player.x, &mut self.hazards);

        // 2. 规划：更新平滑目标
        self.state.target_y = self.planner.plan(&self.hazards, player.x, self.state.target_y);

        // 3. 模式解析 + 执行
        let mode = ControlMode::resolve(&player, config);
        let signal = match mode {
            ControlMode::Pid => self.pid.actuate(&mut self.state, &player, &self.hazards),
            ControlMode::Raycast => self.raycast.actuate(&mut self.state, &player, &self.hazards),
            ControlMode::DiscreteGround => {
                self.ground.actuate(&mut self.state, &player, &self.hazards)
            },
        };

        debug!(
            ?mode,
            hazards = self.hazards.len(),
            target_y = self.state.target_y,
            ?signal,
            "tick"
        );

        signal
    }

    /// 当前控制器状态（诊断/测试用）
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// 最近一个 tick 感知到的危险物（诊断/测试用）
    pub fn hazards(&self) -> &[Aabb] {
        &self.hazards
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Aabb, ObjectKind, PlayerSnapshot, WorldObject};

    fn enabled() -> RunConfig {
        RunConfig {
            master_enabled: true,
            ..Default::default()
        }
    }

    fn cube(x: f32, y: f32, on_ground: bool) -> PlayerSnapshot {
        PlayerSnapshot {
            x,
            y,
            on_ground,
            ship: false,
            dart: false,
            alive: true,
        }
    }

    fn spike(x: f32, max_y: f32) -> WorldObject {
        WorldObject {
            x,
            bounds: Aabb::new(x, 0.0, x + 30.0, max_y),
            kind: ObjectKind::Spike,
        }
    }

    #[test]
    fn test_master_disabled_is_noop() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let before = *pilot.state();

        let objects = [spike(40.0, 60.0)];
        let snapshot = WorldSnapshot {
            objects: &objects,
            player: Some(cube(0.0, 15.0, true)),
        };

        let signal = pilot.tick(Some(&snapshot), &RunConfig::default());
        assert_eq!(signal, None);
        assert_eq!(*pilot.state(), before);
    }

    #[test]
    fn test_absent_snapshot_is_noop() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let before = *pilot.state();

        assert_eq!(pilot.tick(None, &enabled()), None);
        assert_eq!(*pilot.state(), before);
    }

    #[test]
    fn test_absent_player_is_noop() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let before = *pilot.state();

        let objects = [spike(40.0, 60.0)];
        let snapshot = WorldSnapshot {
            objects: &objects,
            player: None,
        };

        assert_eq!(pilot.tick(Some(&snapshot), &enabled()), None);
        assert_eq!(*pilot.state(), before);
    }

    #[test]
    fn test_dead_player_is_noop() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let before = *pilot.state();

        let mut player = cube(0.0, 15.0, true);
        player.alive = false;
        let snapshot = WorldSnapshot {
            objects: &[],
            player: Some(player),
        };

        assert_eq!(pilot.tick(Some(&snapshot), &enabled()), None);
        assert_eq!(*pilot.state(), before);
    }

    #[test]
    fn test_run_start_resets_to_baseline() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);

        assert_eq!(pilot.state().target_y, 75.0);
        assert_eq!(pilot.state().integral, 0.0);
        assert_eq!(pilot.state().prev_error, 0.0);
    }

    #[test]
    fn test_ground_mode_jumps_over_spike() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);

        // 规格场景：前缘 40 ∈ (0,70)，55 <= 60，接地 → 起跳
        let objects = [spike(40.0, 60.0)];
        let snapshot = WorldSnapshot {
            objects: &objects,
            player: Some(cube(0.0, 55.0, true)),
        };

        assert_eq!(pilot.tick(Some(&snapshot), &enabled()), Some(JumpSignal::Press));
    }

    #[test]
    fn test_hazards_rebuilt_each_tick() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);

        let objects = [spike(100.0, 30.0), spike(300.0, 30.0)];
        let snapshot = WorldSnapshot {
            objects: &objects,
            player: Some(cube(0.0, 15.0, true)),
        };
        pilot.tick(Some(&snapshot), &enabled());
        assert_eq!(pilot.hazards().len(), 2);

        // 世界清空后缓冲不得残留上一 tick 的危险物
        let snapshot = WorldSnapshot {
            objects: &[],
            player: Some(cube(0.0, 15.0, true)),
        };
        pilot.tick(Some(&snapshot), &enabled());
        assert!(pilot.hazards().is_empty());
    }

    #[test]
    fn test_planner_runs_every_tick_regardless_of_mode() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);

        // 地面模式下规划器同样更新目标：目标 75 在危险物 [0, 100] 内
        let objects = [spike(100.0, 100.0)];
        let snapshot = WorldSnapshot {
            objects: &objects,
            player: Some(cube(0.0, 15.0, true)),
        };

        pilot.tick(Some(&snapshot), &enabled());
        assert!(pilot.state().target_y > 75.0);
    }

    #[test]
    fn test_ship_uses_pid_and_mutates_accumulators() {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);

        let snapshot = WorldSnapshot {
            objects: &[],
            player: Some(PlayerSnapshot {
                x: 0.0,
                y: 10.0,
                on_ground: false,
                ship: true,
                dart: false,
                alive: true,
            }),
        };

        let signal = pilot.tick(Some(&snapshot), &enabled());
        // 误差 65：输出远超阈值 → 按下，且积分开始累积
        assert_eq!(signal, Some(JumpSignal::Press));
        assert_eq!(pilot.state().integral, 65.0);
        assert_eq!(pilot.state().prev_error, 65.0);
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let mut tuning = Tuning::default();
        tuning.smoothing = 2.0;
        assert!(Autopilot::with_tuning(&tuning).is_err());
    }
}
