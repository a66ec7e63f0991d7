//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the generator:
//! pipeline configuration, data models and the command list builders.
//!
//! 此模块包含生成器的核心功能：
//! 流水线配置、数据模型和命令列表构建器。

pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;

// Re-exports
pub use config::PipelineConfig;
pub use error::CommandError;
pub use models::{CommandSequence, ExecutionStrategy, JobSpec, PlatformDescriptor};
pub use planner::plan_commands;
