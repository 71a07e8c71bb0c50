//! 控制核心错误类型定义
//!
//! tick 路径本身不可失败（前置条件不满足时静默跳过），
//! 错误只出现在构造期的参数校验。

use thiserror::Error;

/// 控制核心错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    /// 调参参数非法（构造期校验）
    #[error("invalid tuning parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl ControlError {
    pub(crate) fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        ControlError::InvalidParameter { name, value, reason }
    }
}
