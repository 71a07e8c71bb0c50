//! 执行策略模块
//!
//! 三种互斥的执行策略共享 [`Actuator`] 契约，每 tick 由
//! [`ControlMode::resolve`] 根据宿主上报的运动模式标志选出恰好一种：
//!
//! - [`PidActuator`] - 飞船模式的连续 PID 调节器
//! - [`RaycastActuator`] - 飞镖模式的阈值 bang-bang 控制
//! - [`GroundActuator`] - 默认/兜底的地面门控离散规避

pub mod actuator;
pub mod ground;
pub mod pid;
pub mod raycast;

pub use actuator::{Actuator, JumpSignal};
pub use ground::GroundActuator;
pub use pid::PidActuator;
pub use raycast::RaycastActuator;

use crate::config::RunConfig;
use crate::world::PlayerSnapshot;

/// 本 tick 选用的执行策略
///
/// 每 tick 根据模式标志重新解析，互斥：飞船走 PID，飞镖走 Raycast，
/// 其余（包括对应开关被关掉的飞船/飞镖）一律落到地面离散模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Pid,
    Raycast,
    DiscreteGround,
}

impl ControlMode {
    pub fn resolve(player: &PlayerSnapshot, config: &RunConfig) -> Self {
        if player.ship && config.pid_enabled {
            ControlMode::Pid
        } else if player.dart && config.raycast_enabled {
            ControlMode::Raycast
        } else {
            ControlMode::DiscreteGround
        }
    }
}
