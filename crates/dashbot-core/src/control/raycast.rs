//! Raycast 执行器 - 飞镖等阈值运动模式
//!
//! 纯比例 bang-bang：低于目标高度就按住，否则松开。完全无状态，
//! 不读也不写 PID 累积量。

use crate::control::actuator::{Actuator, JumpSignal};
use crate::state::ControllerState;
use crate::world::{Aabb, PlayerSnapshot};

/// Raycast 执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct RaycastActuator;

impl RaycastActuator {
    pub fn new() -> Self {
        Self
    }
}

impl Actuator for RaycastActuator {
    fn actuate(
        &self,
        state: &mut ControllerState,
        player: &PlayerSnapshot,
        _hazards: &[Aabb],
    ) -> Option<JumpSignal> {
        if player.y < state.target_y {
            Some(JumpSignal::Press)
        } else {
            Some(JumpSignal::Release)
        }
    }
}
