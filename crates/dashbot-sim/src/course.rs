//! 课程模型 - 地面、终点与实体布局
//!
//! 课程可以从 TOML 文件加载，也可以用显式种子确定性生成。
//! 文件格式示例：
//!
//! ```toml
//! name = "first-steps"
//! mode = "cube"
//! ground_level = 0.0
//! length = 3000.0
//!
//! [[objects]]
//! kind = "spike"
//! x = 400.0
//! width = 30.0
//! height = 30.0
//! ```
//!
//! `y` 省略时实体默认坐在地面上。

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use dashbot_core::{Aabb, ObjectKind, WorldObject};

/// 课程加载/校验错误
#[derive(Error, Debug)]
pub enum CourseError {
    /// 文件读写失败
    #[error("failed to read course file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("failed to parse course file: {0}")]
    Parse(#[from] toml::de::Error),

    /// 课程内容非法
    #[error("invalid course `{name}`: {reason}")]
    Invalid { name: String, reason: String },
}

/// 课程的运动模式（决定角色的物理模型与执行策略候选）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseMode {
    /// 方块：重力 + 跳跃脉冲，接地门控
    Cube,
    /// 飞船：按住上推，松开下落
    Ship,
    /// 飞镖：按住固定斜率爬升，松开俯冲
    Dart,
}

/// 课程文件中的单个实体
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub kind: ObjectKind,
    /// 实体左缘 X
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// 底边 Y；省略时坐在地面上
    #[serde(default)]
    pub y: Option<f32>,
}

/// 一条完整课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub mode: CourseMode,
    /// 地面参考高度（跑局开始时传给控制核心）
    pub ground_level: f32,
    /// 终点线 X：角色到达即完赛
    pub length: f32,
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
}

impl Course {
    /// 从 TOML 文件加载并校验
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CourseError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml(content: &str) -> Result<Self, CourseError> {
        let course: Course = toml::from_str(content)?;
        course.validate()?;
        Ok(course)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml(&self) -> String {
        // Course 的所有字段都可序列化，失败只可能是程序缺陷
        toml::to_string_pretty(self).expect("course serialization cannot fail")
    }

    /// 保存到 TOML 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CourseError> {
        fs::write(path, self.to_toml())?;
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> CourseError {
        CourseError::Invalid {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// 校验课程内容
    pub fn validate(&self) -> Result<(), CourseError> {
        if !(self.length > 0.0) {
            return Err(self.invalid("length must be > 0"));
        }
        for (i, obj) in self.objects.iter().enumerate() {
            if !(obj.width > 0.0 && obj.height > 0.0) {
                return Err(self.invalid(format!("object #{i} has non-positive size")));
            }
            if obj.x < 0.0 || obj.x > self.length {
                return Err(self.invalid(format!("object #{i} lies outside [0, length]")));
            }
        }
        Ok(())
    }

    /// 展开为宿主每 tick 上报的世界实体列表
    ///
    /// 实体 X 取包围盒中心（与宿主上报"实体位置"的语义一致），
    /// 感知窗口按它过滤。
    pub fn world_objects(&self) -> Vec<WorldObject> {
        self.objects
            .iter()
            .map(|spec| {
                let min_y = spec.y.unwrap_or(self.ground_level);
                let bounds = Aabb::new(spec.x, min_y, spec.x + spec.width, min_y + spec.height);
                WorldObject {
                    x: spec.x + spec.width / 2.0,
                    bounds,
                    kind: spec.kind,
                }
            })
            .collect()
    }

    /// 确定性生成随机课程
    ///
    /// 相同的 `params`（含种子）必然生成相同的课程，便于复现跑局。
    pub fn generate(params: &GenerateParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut objects = Vec::new();

        // 起步留出一段空地，再以随机间隔布置危险物
        let mut x = params.head_room;
        while x < params.length - params.head_room {
            let (width, height) = match params.mode {
                CourseMode::Cube => (30.0, 30.0),
                // 飞行模式的障碍顶边保持在巡航高度以下
                CourseMode::Ship | CourseMode::Dart => (30.0, rng.gen_range(20.0..35.0)),
            };
            objects.push(ObjectSpec {
                kind: ObjectKind::Spike,
                x,
                width,
                height,
                y: None,
            });
            x += rng.gen_range(params.min_gap..params.max_gap);
        }

        debug!(
            seed = params.seed,
            count = objects.len(),
            "generated course"
        );

        Course {
            name: format!("generated-{}", params.seed),
            mode: params.mode,
            ground_level: 0.0,
            length: params.length,
            objects,
        }
    }
}

/// 课程生成参数
#[derive(Debug, Clone, Copy)]
pub struct GenerateParams {
    pub seed: u64,
    pub mode: CourseMode,
    pub length: f32,
    /// 起步与终点前的空地长度
    pub head_room: f32,
    /// 相邻危险物的最小间距
    pub min_gap: f32,
    /// 相邻危险物的最大间距
    pub max_gap: f32,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            seed: 0,
            mode: CourseMode::Cube,
            length: 5000.0,
            head_room: 500.0,
            // 间距下限要给跳跃弧线留出落点
            min_gap: 320.0,
            max_gap: 700.0,
        }
    }
}
