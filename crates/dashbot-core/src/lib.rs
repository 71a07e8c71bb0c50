//! # Dashbot Core - 障碍跑酷自动驾驶控制核心
//!
//! 本 crate 实现一个逐 tick 的反应式控制回路，驱动横版跑酷角色
//! 感知前方危险物并做出跳/不跳的离散决策：
//!
//! - **感知**（[`sensor`]）: 提取前向感知窗口内的危险物包围盒
//! - **规划**（[`planner`]）: 围绕危险物重算期望高度，指数平滑防抖
//! - **执行**（[`control`]）: 三种互斥的执行策略（PID / Raycast / 地面离散）
//! - **驱动**（[`pilot`]）: 每 tick 一次的编排入口与跑局生命周期
//!
//! # 设计原则
//!
//! - **宿主无关**: 不依赖任何游戏引擎，输入是每 tick 的世界快照，
//!   输出是一个二元跳跃信号（[`JumpSignal`]）
//! - **单写者**: 所有控制器内部状态由 tick 入口独占修改，
//!   宿主保证 tick 串行执行
//! - **防御性跳过**: 快照或角色缺失时，本 tick 静默退化为无操作，
//!   不报错、不改状态
//!
//! # 使用示例
//!
//! ```rust
//! use dashbot_core::{Autopilot, RunConfig, WorldSnapshot, PlayerSnapshot};
//!
//! let mut pilot = Autopilot::new();
//! let config = RunConfig { master_enabled: true, ..Default::default() };
//!
//! // 跑局开始：重置控制器状态
//! pilot.on_run_start(0.0);
//!
//! // 每个模拟 tick 调用一次
//! let snapshot = WorldSnapshot {
//!     objects: &[],
//!     player: Some(PlayerSnapshot {
//!         x: 0.0,
//!         y: 105.0,
//!         on_ground: true,
//!         ship: false,
//!         dart: false,
//!         alive: true,
//!     }),
//! };
//! let signal = pilot.tick(Some(&snapshot), &config);
//! assert!(signal.is_some());
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod pilot;
pub mod planner;
pub mod sensor;
pub mod state;
pub mod tuning;
pub mod world;

// 重新导出常用类型
pub use config::{RunConfig, SharedRunConfig};
pub use control::{Actuator, ControlMode, JumpSignal};
pub use error::ControlError;
pub use pilot::Autopilot;
pub use planner::TrajectoryPlanner;
pub use sensor::HazardSensor;
pub use state::ControllerState;
pub use tuning::{PidGains, Tuning};
pub use world::{Aabb, ObjectKind, PlayerSnapshot, WorldObject, WorldSnapshot};
