//! PID 执行器 - 飞船等连续运动模式
//!
//! 经典位置式 PID，跟踪规划器输出的平滑目标高度：
//!
//! ```text
//! error      = target_y - current_y
//! integral  += error
//! derivative = error - prev_error
//! output     = Kp * error + Ki * integral + Kd * derivative
//! ```
//!
//! 输出大于触发阈值时按下跳跃键，否则松开。
//!
//! # 已知缺陷（有意保留）
//!
//! 积分项**没有抗饱和钳位**：长时间无危险物的平直段上误差同号累积，
//! 存在积分饱和风险。这是被建模控制器的可观测行为，按规格保留，
//! 不做静默修正。

use crate::control::actuator::{Actuator, JumpSignal};
use crate::state::ControllerState;
use crate::tuning::PidGains;
use crate::world::{Aabb, PlayerSnapshot};

/// PID 执行器
///
/// 自身只持有增益；积分与上次误差存放在 [`ControllerState`]，
/// 跨 tick 持久、跑局开始时由驱动器统一重置。
#[derive(Debug, Clone, Copy)]
pub struct PidActuator {
    gains: PidGains,
}

impl PidActuator {
    pub fn new() -> Self {
        Self {
            gains: PidGains::default(),
        }
    }

    pub fn from_gains(gains: PidGains) -> Self {
        Self { gains }
    }

    /// 覆盖增益（Kp, Ki, Kd）
    pub fn with_gains(mut self, kp: f32, ki: f32, kd: f32) -> Self {
        self.gains.kp = kp;
        self.gains.ki = ki;
        self.gains.kd = kd;
        self
    }

    /// 覆盖触发阈值
    pub fn with_trigger(mut self, trigger: f32) -> Self {
        self.gains.trigger = trigger;
        self
    }

    pub fn gains(&self) -> &PidGains {
        &self.gains
    }
}

impl Default for PidActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl Actuator for PidActuator {
    fn actuate(
        &self,
        state: &mut ControllerState,
        player: &PlayerSnapshot,
        _hazards: &[Aabb],
    ) -> Option<JumpSignal> {
        let error = state.target_y - player.y;

        // 无钳位累积，见模块文档
        state.integral += error;
        let derivative = error - state.prev_error;
        state.prev_error = error;

        let output =
            self.gains.kp * error + self.gains.ki * state.integral + self.gains.kd * derivative;

        if output > self.gains.trigger {
            Some(JumpSignal::Press)
        } else {
            Some(JumpSignal::Release)
        }
    }
}
