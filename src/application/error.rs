//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::UpstreamError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 上游调用失败
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}
