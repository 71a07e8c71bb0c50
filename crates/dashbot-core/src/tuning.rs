//! 调参表 - 控制回路的全部常量
//!
//! 默认值即参考行为；上层（CLI / 宿主）可以从 TOML 加载覆盖值，
//! 加载后必须调用 [`Tuning::validate`] 再交给 [`Autopilot`]：
//!
//! ```rust
//! use dashbot_core::{Autopilot, Tuning};
//!
//! let mut tuning = Tuning::default();
//! tuning.smoothing = 0.25;
//! tuning.validate().unwrap();
//!
//! let pilot = Autopilot::with_tuning(&tuning).unwrap();
//! # let _ = pilot;
//! ```
//!
//! [`Autopilot`]: crate::pilot::Autopilot

use serde::{Deserialize, Serialize};

use crate::error::ControlError;

/// 前向感知窗口宽度（世界单位）
pub const DEFAULT_SENSE_WINDOW: f32 = 800.0;

/// 规划器参与距离：只有水平距离小于此值的危险物会抬升目标
pub const DEFAULT_ENGAGE_DISTANCE: f32 = 250.0;

/// 越过危险物顶边的固定净空余量
pub const DEFAULT_CLEARANCE: f32 = 40.0;

/// 目标高度的指数平滑系数
///
/// 过高会震荡，过低会反应迟钝、错过规避窗口。
pub const DEFAULT_SMOOTHING: f32 = 0.15;

/// 跑局开始时目标高度相对地面的基线偏移
pub const DEFAULT_BASELINE_OFFSET: f32 = 75.0;

/// 地面离散模式的前视距离：危险物前缘进入 `(0, lookahead)` 才触发跳跃
pub const DEFAULT_GROUND_LOOKAHEAD: f32 = 70.0;

/// PID 增益与触发阈值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidGains {
    /// 比例增益
    pub kp: f32,
    /// 积分增益
    pub ki: f32,
    /// 微分增益
    pub kd: f32,
    /// 跳跃触发阈值：输出大于此值按下，否则松开
    pub trigger: f32,
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            kp: 1.2,
            ki: 0.01,
            kd: 0.5,
            trigger: 6.5,
        }
    }
}

/// 控制回路调参表
///
/// 所有字段都有与参考行为一致的默认值，TOML 中可以只写需要覆盖的项。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// 感知窗口宽度
    pub sense_window: f32,
    /// 规划器参与距离
    pub engage_distance: f32,
    /// 危险物顶边净空
    pub clearance: f32,
    /// 目标平滑系数，必须在 `(0, 1]` 内
    pub smoothing: f32,
    /// 跑局起始目标的基线偏移
    pub baseline_offset: f32,
    /// 地面模式前视距离
    pub ground_lookahead: f32,
    /// PID 增益
    pub pid: PidGains,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sense_window: DEFAULT_SENSE_WINDOW,
            engage_distance: DEFAULT_ENGAGE_DISTANCE,
            clearance: DEFAULT_CLEARANCE,
            smoothing: DEFAULT_SMOOTHING,
            baseline_offset: DEFAULT_BASELINE_OFFSET,
            ground_lookahead: DEFAULT_GROUND_LOOKAHEAD,
            pid: PidGains::default(),
        }
    }
}

impl Tuning {
    /// 校验参数合法性
    ///
    /// 在把外部加载的调参表交给控制回路之前调用。
    pub fn validate(&self) -> Result<(), ControlError> {
        if !(self.sense_window > 0.0) {
            return Err(ControlError::invalid(
                "sense_window",
                self.sense_window,
                "must be > 0",
            ));
        }
        if !(self.engage_distance > 0.0) {
            return Err(ControlError::invalid(
                "engage_distance",
                self.engage_distance,
                "must be > 0",
            ));
        }
        if !(self.clearance >= 0.0) {
            return Err(ControlError::invalid(
                "clearance",
                self.clearance,
                "must be >= 0",
            ));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ControlError::invalid(
                "smoothing",
                self.smoothing,
                "must be in (0, 1]",
            ));
        }
        if !(self.ground_lookahead > 0.0) {
            return Err(ControlError::invalid(
                "ground_lookahead",
                self.ground_lookahead,
                "must be > 0",
            ));
        }
        Ok(())
    }
}
