//! 危险物传感器 - 前向窗口内的环境感知
//!
//! 每 tick 扫描一遍世界实体，保留满足两个条件的实体包围盒：
//!
//! 1. X 坐标落在半开前向窗口 `(entity_x, entity_x + window]` 内
//! 2. 分类属于危险物（[`ObjectKind::is_hazard`]）
//!
//! 输出顺序就是世界实体的遍历顺序，不排序；下游把它当集合消费，
//! 只有地面离散模式依赖"源顺序首个命中"这一点。

use crate::tuning::{DEFAULT_SENSE_WINDOW, Tuning};
use crate::world::{Aabb, WorldObject};

/// 危险物传感器
#[derive(Debug, Clone, Copy)]
pub struct HazardSensor {
    /// 前向感知窗口宽度
    window: f32,
}

impl HazardSensor {
    pub fn new() -> Self {
        Self {
            window: DEFAULT_SENSE_WINDOW,
        }
    }

    /// 覆盖窗口宽度
    pub fn with_window(mut self, window: f32) -> Self {
        self.window = window;
        self
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            window: tuning.sense_window,
        }
    }

    pub fn window(&self) -> f32 {
        self.window
    }

    /// 扫描并把命中的包围盒写入 `out`
    ///
    /// `out` 先被清空再填充：上一 tick 的内容整体丢弃，
    /// 绝不跨 tick 残留。空输入产生空输出，无错误路径。
    pub fn scan_into(&self, objects: &[WorldObject], entity_x: f32, out: &mut Vec<Aabb>) {
        out.clear();

        for obj in objects {
            if obj.x > entity_x && obj.x <= entity_x + self.window && obj.kind.is_hazard() {
                out.push(obj.bounds);
            }
        }
    }

    /// [`scan_into`](Self::scan_into) 的分配版本，测试用
    pub fn scan(&self, objects: &[WorldObject], entity_x: f32) -> Vec<Aabb> {
        let mut out = Vec::new();
        self.scan_into(objects, entity_x, &mut out);
        out
    }
}

impl Default for HazardSensor {
    fn default() -> Self {
        Self::new()
    }
}
