//! 轨迹规划器 - 围绕危险物重算目标高度
//!
//! # 算法
//!
//! 从当前平滑目标出发，按传感器顺序单遍扫描危险物：
//!
//! ```text
//! optimal_y = previous_target
//! for hazard in hazards:
//!     if |hazard.min_x - entity_x| < engage_distance
//!        && optimal_y ∈ [hazard.min_y, hazard.max_y]:
//!         optimal_y = hazard.max_y + clearance
//! new_target = previous_target + (optimal_y - previous_target) * smoothing
//! ```
//!
//! 后面的危险物若仍与抬升后的 `optimal_y` 相交可以继续抬升，但不会
//! 回头复查前面的危险物 —— 这是"首次适配后抬升"的单遍策略，不是全局
//! 最优解。
//!
//! 最后一步指数平滑抑制目标突变。无相交危险物时 `optimal_y` 保持不动，
//! 平滑是恒等映射：目标收敛到自身（均衡点幂等）。

use crate::tuning::{DEFAULT_CLEARANCE, DEFAULT_ENGAGE_DISTANCE, DEFAULT_SMOOTHING, Tuning};
use crate::world::Aabb;

/// 轨迹规划器
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryPlanner {
    /// 参与距离：只考虑前缘水平距离小于此值的危险物
    engage_distance: f32,
    /// 越过危险物顶边的净空余量
    clearance: f32,
    /// 指数平滑系数
    smoothing: f32,
}

impl TrajectoryPlanner {
    pub fn new() -> Self {
        Self {
            engage_distance: DEFAULT_ENGAGE_DISTANCE,
            clearance: DEFAULT_CLEARANCE,
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// 覆盖参与距离
    pub fn with_engage_distance(mut self, distance: f32) -> Self {
        self.engage_distance = distance;
        self
    }

    /// 覆盖净空余量
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }

    /// 覆盖平滑系数
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            engage_distance: tuning.engage_distance,
            clearance: tuning.clearance,
            smoothing: tuning.smoothing,
        }
    }

    /// 计算新的平滑目标高度
    ///
    /// 不修改任何状态；调用方负责把返回值写回
    /// [`ControllerState::target_y`](crate::state::ControllerState)。
    pub fn plan(&self, hazards: &[Aabb], entity_x: f32, previous_target: f32) -> f32 {
        let mut optimal_y = previous_target;

        for hazard in hazards {
            if (hazard.min_x - entity_x).abs() < self.engage_distance
                && hazard.contains_y(optimal_y)
            {
                optimal_y = hazard.max_y + self.clearance;
            }
        }

        previous_target + (optimal_y - previous_target) * self.smoothing
    }
}

impl Default for TrajectoryPlanner {
    fn default() -> Self {
        Self::new()
    }
}
