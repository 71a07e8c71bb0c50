//! 世界快照类型 - 宿主每 tick 提供的只读视图
//!
//! 这些类型只包含控制回路关心的字段（位置、包围盒、分类、接地标志），
//! 不含任何渲染或引擎相关的内容。快照以借用传入，tick 内消费完毕，
//! 不跨 tick 持有。

use serde::{Deserialize, Serialize};

/// 轴对齐包围盒（世界坐标）
///
/// 危险物的占据区域。每 tick 由传感器从世界实体重新捕获，
/// 捕获后不可变，下一 tick 整体丢弃重建。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// 以中心点和尺寸构造（课程文件和测试的便捷入口）
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            min_x: cx - hw,
            min_y: cy - hh,
            max_x: cx + hw,
            max_y: cy + hh,
        }
    }

    /// 垂直区间 `[min_y, max_y]`（闭区间）是否覆盖 `y`
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.min_y && y <= self.max_y
    }

    /// 与另一个包围盒是否重叠（闭区间）
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// 世界实体分类（宿主上报）
///
/// 只有 [`ObjectKind::Hazard`] 和 [`ObjectKind::Spike`] 被视为危险物，
/// 其余分类在感知阶段即被过滤掉。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// 可站立的实体方块
    Solid,
    /// 通用危险物
    Hazard,
    /// 地刺
    Spike,
    /// 纯装饰，无碰撞
    Decoration,
}

impl ObjectKind {
    /// 是否属于危险物分类
    pub fn is_hazard(self) -> bool {
        matches!(self, ObjectKind::Hazard | ObjectKind::Spike)
    }
}

/// 单个世界实体的每 tick 视图
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldObject {
    /// 实体 X 坐标（感知窗口按此过滤）
    pub x: f32,
    /// 实体包围盒
    pub bounds: Aabb,
    /// 宿主分类
    pub kind: ObjectKind,
}

/// 受控角色的每 tick 状态（宿主上报，只读）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    /// 接地标志：门控地面离散模式的跳跃决策
    pub on_ground: bool,
    /// 飞船模式标志（连续运动，PID 候选）
    pub ship: bool,
    /// 飞镖模式标志（阈值运动，Raycast 候选）
    pub dart: bool,
    pub alive: bool,
}

/// 每 tick 的完整世界视图
///
/// `player` 为 `None` 表示受控角色缺失（例如关卡切换中），
/// 此时整个 tick 应静默跳过。
#[derive(Debug, Clone, Copy)]
pub struct WorldSnapshot<'a> {
    pub objects: &'a [WorldObject],
    pub player: Option<PlayerSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_center() {
        let b = Aabb::from_center(100.0, 50.0, 30.0, 20.0);
        assert_eq!(b.min_x, 85.0);
        assert_eq!(b.max_x, 115.0);
        assert_eq!(b.min_y, 40.0);
        assert_eq!(b.max_y, 60.0);
    }

    #[test]
    fn test_aabb_contains_y_inclusive() {
        let b = Aabb::new(0.0, 10.0, 30.0, 40.0);
        assert!(b.contains_y(10.0)); // 下边界（含）
        assert!(b.contains_y(40.0)); // 上边界（含）
        assert!(b.contains_y(25.0));
        assert!(!b.contains_y(9.9));
        assert!(!b.contains_y(40.1));
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 15.0, 15.0);
        let c = Aabb::new(11.0, 0.0, 20.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_object_kind_is_hazard() {
        assert!(ObjectKind::Hazard.is_hazard());
        assert!(ObjectKind::Spike.is_hazard());
        assert!(!ObjectKind::Solid.is_hazard());
        assert!(!ObjectKind::Decoration.is_hazard());
    }
}
