//! # Dashbot Sim - 无头宿主模拟
//!
//! 真实宿主（游戏引擎）不在核心范围内；本 crate 提供一个刻意简化的
//! 替身，让控制核心可以在没有引擎的情况下被端到端驱动：
//!
//! - [`course`]: 课程描述（地面高度、终点、实体列表）、TOML 课程文件、
//!   确定性随机生成器
//! - [`physics`]: 最小化的角色运动模型（仅够触发三种执行模式）
//! - [`harness`]: 把 [`Autopilot`](dashbot_core::Autopilot) 接到物理
//!   模型上按固定 tick 率跑完一局
//!
//! 物理模型是**有意缩减的**：恒定水平速度、单轴竖直运动、包围盒碰撞
//! 判死。它不是碰撞物理引擎，只是控制回路的试验台。

pub mod course;
pub mod harness;
pub mod physics;

pub use course::{Course, CourseError, CourseMode, GenerateParams, ObjectSpec};
pub use harness::{RunOutcome, SimRunner, StepResult, TICK_RATE_HZ};
pub use physics::PlayerBody;
