//! Errors raised while building command lists.

use thiserror::Error;

/// Failures of the command builders.
/// 命令构建器的失败类型。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No command template exists for the requested platform and strategy.
    /// The CI job generation must abort rather than emit an empty job.
    /// 请求的平台和策略组合没有对应的命令模板。CI 作业生成必须中止。
    #[error("{platform}: {reason}")]
    UnsupportedConfiguration { platform: String, reason: String },

    /// An input would not survive shell interpolation as a single word.
    /// 输入值无法作为单个 shell 单词安全插入。
    #[error("{field} {value:?} is not a plain shell word")]
    UnsafeInput { field: &'static str, value: String },
}
