//! Actuator trait - 执行策略通用契约
//!
//! 每 tick 至多调用一次 `actuate`，返回本 tick 要下发给宿主的跳跃信号。
//! 返回 `None` 表示本 tick 不下发任何信号（既不按下也不松开）——
//! 目前只有地面离散模式在角色腾空时这样做。
//!
//! 执行器自身只持有增益等只读参数；跨 tick 的可变状态
//! （积分、上次误差）集中放在 [`ControllerState`] 里，由 tick 入口
//! 借给执行器修改。

use crate::state::ControllerState;
use crate::world::{Aabb, PlayerSnapshot};

/// 下发给宿主的二元跳跃信号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpSignal {
    /// 按下跳跃键
    Press,
    /// 松开跳跃键
    Release,
}

impl JumpSignal {
    pub fn is_press(self) -> bool {
        matches!(self, JumpSignal::Press)
    }
}

/// 执行策略通用接口
pub trait Actuator {
    /// 计算本 tick 的跳跃信号
    ///
    /// # 参数
    ///
    /// - `state`: 控制器可变状态（PID 执行器会更新误差/积分）
    /// - `player`: 受控角色当前状态
    /// - `hazards`: 本 tick 感知到的危险物（传感器顺序）
    ///
    /// # 返回
    ///
    /// - `Some(signal)`: 下发信号
    /// - `None`: 本 tick 不下发（信号被扣留，而非覆盖）
    fn actuate(
        &self,
        state: &mut ControllerState,
        player: &PlayerSnapshot,
        hazards: &[Aabb],
    ) -> Option<JumpSignal>;
}
