//! 最小化角色运动模型
//!
//! 恒定水平速度 + 单轴竖直运动，三种课程模式各自一套竖直规则：
//!
//! - **Cube**: 重力下落，接地且按住时施加一次跳跃脉冲
//! - **Ship**: 按住净上推，松开净下落，竖直速度钳位
//! - **Dart**: 按住固定斜率爬升，松开固定斜率俯冲
//!
//! 这只是控制回路的试验台，不是碰撞物理引擎：没有斜面、没有反弹、
//! 没有旋转，碰撞判死交给上层的包围盒重叠检查。

use dashbot_core::{Aabb, JumpSignal, PlayerSnapshot};

use crate::course::CourseMode;

/// 水平滚动速度（单位/秒）
pub const SCROLL_SPEED: f32 = 300.0;

/// 方块重力加速度
pub const CUBE_GRAVITY: f32 = 900.0;

/// 方块跳跃脉冲（起跳瞬时竖直速度）
pub const JUMP_IMPULSE: f32 = 360.0;

/// 飞船按住时的净上推加速度
pub const SHIP_THRUST: f32 = 600.0;

/// 飞船松开时的净下落加速度
pub const SHIP_FALL: f32 = 500.0;

/// 飞船竖直速度钳位（限制过冲幅度）
pub const SHIP_VY_LIMIT: f32 = 100.0;

/// 飞镖的固定爬升/俯冲速度
pub const DART_SLOPE: f32 = 150.0;

/// 角色碰撞盒半边长
pub const PLAYER_HALF: f32 = 9.0;

/// 飞行模式的天花板高度（相对地面）
pub const CEILING: f32 = 300.0;

/// 受控角色的物理状态
#[derive(Debug, Clone, Copy)]
pub struct PlayerBody {
    pub x: f32,
    /// 碰撞盒中心高度
    pub y: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub alive: bool,
    mode: CourseMode,
    ground: f32,
    /// 当前按键状态；`None` 信号保持原状
    held: bool,
}

impl PlayerBody {
    /// 在课程起点生成角色
    pub fn spawn(mode: CourseMode, ground_level: f32) -> Self {
        Self {
            x: 0.0,
            y: ground_level + PLAYER_HALF,
            vy: 0.0,
            on_ground: true,
            alive: true,
            mode,
            ground: ground_level,
            held: false,
        }
    }

    /// 应用控制回路的输出
    ///
    /// `None` 表示本 tick 信号被扣留：按键保持上一 tick 的状态。
    pub fn apply(&mut self, signal: Option<JumpSignal>) {
        if let Some(signal) = signal {
            self.held = signal.is_press();
        }
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// 推进一个时间步
    pub fn step(&mut self, dt: f32) {
        self.x += SCROLL_SPEED * dt;

        let floor = self.ground + PLAYER_HALF;
        let ceiling = self.ground + CEILING;

        match self.mode {
            CourseMode::Cube => {
                if self.on_ground && self.held {
                    self.vy = JUMP_IMPULSE;
                    self.on_ground = false;
                }
                if !self.on_ground {
                    self.vy -= CUBE_GRAVITY * dt;
                    self.y += self.vy * dt;
                    if self.y <= floor {
                        self.y = floor;
                        self.vy = 0.0;
                        self.on_ground = true;
                    }
                }
            },

            CourseMode::Ship => {
                let accel = if self.held { SHIP_THRUST } else { -SHIP_FALL };
                self.vy = (self.vy + accel * dt).clamp(-SHIP_VY_LIMIT, SHIP_VY_LIMIT);
                self.y += self.vy * dt;
                self.clamp_vertical(floor, ceiling);
            },

            CourseMode::Dart => {
                self.vy = if self.held { DART_SLOPE } else { -DART_SLOPE };
                self.y += self.vy * dt;
                self.clamp_vertical(floor, ceiling);
            },
        }
    }

    fn clamp_vertical(&mut self, floor: f32, ceiling: f32) {
        if self.y <= floor {
            self.y = floor;
            self.vy = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
            if self.y >= ceiling {
                self.y = ceiling;
                self.vy = 0.0;
            }
        }
    }

    /// 角色碰撞盒
    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center(self.x, self.y, PLAYER_HALF * 2.0, PLAYER_HALF * 2.0)
    }

    /// 上报给控制核心的快照
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            x: self.x,
            y: self.y,
            on_ground: self.on_ground,
            ship: self.mode == CourseMode::Ship,
            dart: self.mode == CourseMode::Dart,
            alive: self.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_cube_spawns_on_ground() {
        let body = PlayerBody::spawn(CourseMode::Cube, 0.0);
        assert!(body.on_ground);
        assert_eq!(body.y, PLAYER_HALF);
        assert!(body.alive);
    }

    #[test]
    fn test_cube_jump_and_land() {
        let mut body = PlayerBody::spawn(CourseMode::Cube, 0.0);
        body.apply(Some(JumpSignal::Press));
        body.step(DT);
        assert!(!body.on_ground);
        assert!(body.y > PLAYER_HALF);

        body.apply(Some(JumpSignal::Release));
        // 跳跃弧线在 2*impulse/gravity = 0.8s 内结束
        for _ in 0..60 {
            body.step(DT);
        }
        assert!(body.on_ground);
        assert_eq!(body.y, PLAYER_HALF);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_cube_no_double_jump_midair() {
        let mut body = PlayerBody::spawn(CourseMode::Cube, 0.0);
        body.apply(Some(JumpSignal::Press));
        body.step(DT);
        let vy_after_jump = body.vy;

        // 腾空时按键不产生第二次脉冲
        body.step(DT);
        assert!(body.vy < vy_after_jump);
    }

    #[test]
    fn test_ship_climbs_while_held() {
        let mut body = PlayerBody::spawn(CourseMode::Ship, 0.0);
        body.apply(Some(JumpSignal::Press));
        for _ in 0..30 {
            body.step(DT);
        }
        assert!(body.y > PLAYER_HALF);
        assert!(body.vy > 0.0);
        assert!(body.vy <= SHIP_VY_LIMIT);
    }

    #[test]
    fn test_ship_falls_when_released_and_floors() {
        let mut body = PlayerBody::spawn(CourseMode::Ship, 0.0);
        body.apply(Some(JumpSignal::Press));
        for _ in 0..60 {
            body.step(DT);
        }
        body.apply(Some(JumpSignal::Release));
        for _ in 0..240 {
            body.step(DT);
        }
        assert_eq!(body.y, PLAYER_HALF);
        assert!(body.on_ground);
    }

    #[test]
    fn test_ship_respects_ceiling() {
        let mut body = PlayerBody::spawn(CourseMode::Ship, 0.0);
        body.apply(Some(JumpSignal::Press));
        for _ in 0..1200 {
            body.step(DT);
        }
        assert!(body.y <= CEILING);
    }

    #[test]
    fn test_dart_slope_is_symmetric() {
        let mut body = PlayerBody::spawn(CourseMode::Dart, 0.0);
        body.apply(Some(JumpSignal::Press));
        for _ in 0..60 {
            body.step(DT);
        }
        let top = body.y;
        assert!((top - (PLAYER_HALF + DART_SLOPE)).abs() < 1.0);

        body.apply(Some(JumpSignal::Release));
        for _ in 0..30 {
            body.step(DT);
        }
        assert!((body.y - (top - DART_SLOPE / 2.0)).abs() < 1.0);
    }

    #[test]
    fn test_none_signal_keeps_button_state() {
        let mut body = PlayerBody::spawn(CourseMode::Ship, 0.0);
        body.apply(Some(JumpSignal::Press));
        assert!(body.held());

        body.apply(None);
        assert!(body.held());

        body.apply(Some(JumpSignal::Release));
        assert!(!body.held());
    }

    #[test]
    fn test_scrolls_at_constant_speed() {
        let mut body = PlayerBody::spawn(CourseMode::Cube, 0.0);
        for _ in 0..60 {
            body.step(DT);
        }
        assert!((body.x - SCROLL_SPEED).abs() < 0.5);
    }
}
