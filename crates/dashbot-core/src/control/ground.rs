//! 地面离散执行器 - 默认/兜底运动模式
//!
//! 按传感器顺序扫描危险物，找到第一个满足以下两个条件的就认定
//! 需要起跳，并立即停止扫描（源顺序首个命中，不按最近距离择优）：
//!
//! 1. 前缘距离 `hazard.min_x - x` 严格落在 `(0, lookahead)` 内
//! 2. 垂直方向够得着：`y <= hazard.max_y`
//!
//! 信号下发由接地标志门控：腾空时本 tick 不发任何信号 ——
//! 是扣留，不是覆盖，下一 tick 重新评估。

use crate::control::actuator::{Actuator, JumpSignal};
use crate::state::ControllerState;
use crate::tuning::{DEFAULT_GROUND_LOOKAHEAD, Tuning};
use crate::world::{Aabb, PlayerSnapshot};

/// 地面离散执行器
#[derive(Debug, Clone, Copy)]
pub struct GroundActuator {
    /// 前视距离
    lookahead: f32,
}

impl GroundActuator {
    pub fn new() -> Self {
        Self {
            lookahead: DEFAULT_GROUND_LOOKAHEAD,
        }
    }

    /// 覆盖前视距离
    pub fn with_lookahead(mut self, lookahead: f32) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            lookahead: tuning.ground_lookahead,
        }
    }
}

impl Default for GroundActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl Actuator for GroundActuator {
    fn actuate(
        &self,
        _state: &mut ControllerState,
        player: &PlayerSnapshot,
        hazards: &[Aabb],
    ) -> Option<JumpSignal> {
        let mut jump_required = false;

        for hazard in hazards {
            let lead = hazard.min_x - player.x;
            if lead > 0.0 && lead < self.lookahead && player.y <= hazard.max_y {
                jump_required = true;
                break;
            }
        }

        if !player.on_ground {
            return None;
        }

        if jump_required {
            Some(JumpSignal::Press)
        } else {
            Some(JumpSignal::Release)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn state() -> ControllerState {
        ControllerState::default()
    }

    #[test]
    fn test_hazard_in_lookahead_presses() {
        // 前缘距离 40 ∈ (0, 70)，55 <= 60 → 起跳
        let actuator = GroundActuator::new();
        let hazards = [Aabb::new(40.0, 0.0, 70.0, 60.0)];

        let signal = actuator.actuate(&mut state(), &cube(0.0, 55.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Press));
    }

    #[test]
    fn test_no_hazard_releases_on_ground() {
        let actuator = GroundActuator::new();
        let signal = actuator.actuate(&mut state(), &cube(0.0, 15.0, true), &[]);
        assert_eq!(signal, Some(JumpSignal::Release));
    }

    #[test]
    fn test_airborne_withholds_signal() {
        // 腾空：即使前方有危险物也不发信号
        let actuator = GroundActuator::new();
        let hazards = [Aabb::new(40.0, 0.0, 70.0, 60.0)];

        let signal = actuator.actuate(&mut state(), &cube(0.0, 55.0, false), &hazards);
        assert_eq!(signal, None);
    }

    #[test]
    fn test_lookahead_bounds_are_strict() {
        let actuator = GroundActuator::new();

        // 前缘距离恰好 70：开区间右端，不触发
        let hazards = [Aabb::new(70.0, 0.0, 100.0, 60.0)];
        let signal = actuator.actuate(&mut state(), &cube(0.0, 15.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Release));

        // 前缘距离 0（正好脚下）：开区间左端，不触发
        let hazards = [Aabb::new(0.0, 0.0, 30.0, 60.0)];
        let signal = actuator.actuate(&mut state(), &cube(0.0, 15.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Release));
    }

    #[test]
    fn test_hazard_below_player_ignored() {
        // 危险物顶边在角色脚下（y > max_y）→ 够不着角色，不跳
        let actuator = GroundActuator::new();
        let hazards = [Aabb::new(40.0, 0.0, 70.0, 10.0)];

        let signal = actuator.actuate(&mut state(), &cube(0.0, 55.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Release));
    }

    #[test]
    fn test_first_match_in_source_order_wins() {
        // 两个都满足条件，第一个（源顺序）命中后立即停扫；
        // 把第一个换成不满足的，第二个才会被看到
        let actuator = GroundActuator::new();

        let hazards = [
            Aabb::new(60.0, 0.0, 90.0, 60.0), // 源顺序在前，距离反而远
            Aabb::new(30.0, 0.0, 55.0, 60.0),
        ];
        let signal = actuator.actuate(&mut state(), &cube(0.0, 15.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Press));

        let hazards = [
            Aabb::new(200.0, 0.0, 230.0, 60.0), // 超出前视距离
            Aabb::new(30.0, 0.0, 55.0, 60.0),
        ];
        let signal = actuator.actuate(&mut state(), &cube(0.0, 15.0, true), &hazards);
        assert_eq!(signal, Some(JumpSignal::Press));
    }

    #[test]
    fn test_does_not_touch_controller_state() {
        let actuator = GroundActuator::new();
        let mut s = ControllerState {
            target_y: 75.0,
            prev_error: 3.0,
            integral: 9.0,
        };
        let before = s;

        actuator.actuate(&mut s, &cube(0.0, 15.0, true), &[]);
        assert_eq!(s, before);
    }
}
