//! 运行开关配置
//!
//! [`RunConfig`] 是进程级的三个独立布尔开关，由用户通过配置界面修改，
//! 控制回路每 tick 只读。任意布尔组合都是合法的，无需校验。
//!
//! # 线程模型
//!
//! 单线程宿主（UI 回调与 tick 回调串行在同一执行上下文）直接传
//! `&RunConfig` 即可。UI 线程与 tick 线程分离的宿主应使用
//! [`SharedRunConfig`]：读侧无锁（`arc-swap`），写侧整体替换。

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// 运行开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// 总开关：关闭时 tick 完全无操作
    pub master_enabled: bool,
    /// 飞船模式是否启用 PID 控制器
    pub pid_enabled: bool,
    /// 飞镖模式是否启用 Raycast 控制器
    pub raycast_enabled: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            master_enabled: false,
            pid_enabled: true,
            raycast_enabled: true,
        }
    }
}

/// 跨线程共享的运行开关
///
/// tick 路径上 [`load`](SharedRunConfig::load) 是一次无锁指针加载加一次
/// `Copy`，不会阻塞 UI 侧的写入。
#[derive(Debug, Clone)]
pub struct SharedRunConfig {
    inner: Arc<ArcSwap<RunConfig>>,
}

impl SharedRunConfig {
    pub fn new(config: RunConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// 读取当前开关组合（tick 侧）
    pub fn load(&self) -> RunConfig {
        **self.inner.load()
    }

    /// 整体替换开关组合（UI 侧）
    pub fn store(&self, config: RunConfig) {
        self.inner.store(Arc::new(config));
    }

    /// 读-改-写单个开关（UI 侧）
    pub fn update(&self, f: impl Fn(&mut RunConfig)) {
        self.inner.rcu(|current| {
            let mut next = **current;
            f(&mut next);
            next
        });
    }
}

impl Default for SharedRunConfig {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}
