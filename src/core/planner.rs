//! # Command Planner Module / 命令计划模块
//!
//! This module selects the builder matching a job's execution strategy and,
//! when the pipeline asks for it, validates the job's inputs first.
//!
//! 此模块根据作业的执行策略选择对应的构建器，
//! 并在流水线要求时先校验作业的输入。

use crate::core::builder::{
    build_non_standalone_commands, build_standalone_build_commands, build_standalone_commands,
};
use crate::core::config::PipelineConfig;
use crate::core::error::CommandError;
use crate::core::models::{CommandSequence, ExecutionStrategy, JobSpec};
use crate::infra::shell::ensure_shell_safe;

/// Creates the command sequence for `job`.
///
/// # Arguments
/// * `config` - Pipeline paths and remote-device settings
/// * `job` - The job to generate commands for
///
/// # Returns
/// The command sequence, `CommandError::UnsafeInput` when `strict_inputs` is set
/// and an input is not a plain shell word, or `CommandError::UnsupportedConfiguration`
/// for a strategy this platform has no template for
///
/// 为 `job` 创建命令序列。
pub fn plan_commands(
    config: &PipelineConfig,
    job: &JobSpec,
) -> Result<CommandSequence, CommandError> {
    if config.strict_inputs {
        ensure_shell_safe("project_folder", &job.project_folder)?;
        for component in &job.platform.components {
            ensure_shell_safe("component", component)?;
        }
    }

    let folder = job.project_folder.as_str();
    match job.strategy {
        ExecutionStrategy::NonStandalone => Ok(build_non_standalone_commands(
            config,
            folder,
            &job.platform,
            &job.api,
            &job.test_platform_args,
        )),
        ExecutionStrategy::Standalone => Ok(build_standalone_commands(
            config,
            folder,
            &job.platform,
            &job.api,
            &job.test_platform_args,
        )),
        ExecutionStrategy::StandaloneBuild => build_standalone_build_commands(
            config,
            folder,
            &job.platform,
            &job.api,
            &job.test_platform_args,
        ),
    }
}
