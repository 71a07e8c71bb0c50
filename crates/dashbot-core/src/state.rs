//! 控制器状态 - 跨 tick 持久、每跑局重置
//!
//! [`ControllerState`] 由控制回路独占持有：平滑目标高度由规划器更新，
//! 误差/积分累积量由 PID 执行器更新。跑局开始时整体重置到基线。

use crate::tuning;

/// 跨 tick 的控制器内部状态
///
/// 单写者：只有 tick 入口（及其调用的规划器 / PID 执行器）修改它。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    /// 平滑后的目标高度（规划器每 tick 更新）
    pub target_y: f32,
    /// 上一 tick 的位置误差（PID 微分项用）
    pub prev_error: f32,
    /// 误差积分累积量（PID 积分项用，无钳位）
    pub integral: f32,
}

impl ControllerState {
    /// 以给定地面高度创建初始状态
    ///
    /// 目标高度 = 地面高度 + 基线偏移（[`tuning::DEFAULT_BASELINE_OFFSET`]）。
    pub fn new(ground_level: f32) -> Self {
        Self {
            target_y: ground_level + tuning::DEFAULT_BASELINE_OFFSET,
            prev_error: 0.0,
            integral: 0.0,
        }
    }

    /// 跑局开始时重置到基线
    ///
    /// 清零 PID 累积量，目标高度回到地面基线上方的固定偏移处。
    pub fn reset(&mut self, ground_level: f32, baseline_offset: f32) {
        self.target_y = ground_level + baseline_offset;
        self.prev_error = 0.0;
        self.integral = 0.0;
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
