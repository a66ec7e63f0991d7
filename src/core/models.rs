//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the builders and the
//! CLI: the platform descriptor, the execution strategy, the job description
//! and the resulting command sequence.
//!
//! 此模块定义构建器和 CLI 共用的数据结构：
//! 平台描述、执行策略、作业描述以及生成的命令序列。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Describes the platform a job targets.
/// 描述作业的目标平台。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformDescriptor {
    /// Platform name, used in error messages.
    /// 平台名称，用于错误消息。
    #[serde(default = "default_platform_name")]
    pub name: String,
    /// Software components installed on the remote device with the editor, in order.
    /// 与编辑器一起安装到远程设备上的软件组件，按顺序排列。
    pub components: Vec<String>,
}

fn default_platform_name() -> String {
    "osx_metal".to_string()
}

impl PlatformDescriptor {
    /// Creates a descriptor for the default `osx_metal` platform.
    /// 为默认的 `osx_metal` 平台创建描述。
    pub fn new(components: Vec<String>) -> Self {
        Self {
            name: default_platform_name(),
            components,
        }
    }
}

/// How the tests of a job are executed.
/// Each variant maps to exactly one builder.
///
/// 作业中测试的执行方式。每个变体恰好对应一个构建器。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Tests run inside the editor on the device.
    /// 测试在设备上的编辑器内运行。
    #[serde(rename = "not_standalone")]
    NonStandalone,
    /// Tests are built and run as a self-contained player.
    /// 测试被构建为独立的播放器并运行。
    Standalone,
    /// The build phase of a standalone run split into its own job.
    /// 独立运行的构建阶段被拆分为单独的作业。
    StandaloneBuild,
}

impl ExecutionStrategy {
    /// Every strategy, in the order offered by `init`.
    /// 所有策略，按 `init` 中的显示顺序排列。
    pub const ALL: [ExecutionStrategy; 3] = [
        ExecutionStrategy::NonStandalone,
        ExecutionStrategy::Standalone,
        ExecutionStrategy::StandaloneBuild,
    ];

    /// Name used in job files, e.g. `not_standalone`.
    /// 作业文件中使用的名称，例如 `not_standalone`。
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStrategy::NonStandalone => "not_standalone",
            ExecutionStrategy::Standalone => "standalone",
            ExecutionStrategy::StandaloneBuild => "standalone_build",
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ExecutionStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown execution strategy: {}", s))
    }
}

/// A single CI job to generate commands for, loaded from a TOML file.
/// 要为其生成命令的单个 CI 作业，从 TOML 文件加载。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobSpec {
    /// Directory of the test project under the test-projects root.
    /// 测试项目在测试项目根目录下的目录名。
    pub project_folder: String,
    /// Graphics API identifier. Accepted for parity with other platforms; not used in the commands.
    /// 图形 API 标识符。为与其他平台保持一致而接受，但不用于命令中。
    #[serde(default = "default_api")]
    pub api: String,
    /// Pre-formatted test-runner flags, passed through untouched.
    /// 预先格式化的测试运行器参数，原样传递。
    #[serde(default)]
    pub test_platform_args: String,
    pub strategy: ExecutionStrategy,
    pub platform: PlatformDescriptor,
}

fn default_api() -> String {
    "metal".to_string()
}

/// Loads and parses a `JobSpec` from the TOML file at `path`.
pub fn load_job_spec(path: &Path) -> Result<JobSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse job file: {}", path.display()))
}

/// An ordered list of shell commands, meant to run one after another.
/// The last command of a test sequence exits with the test runner's status.
///
/// 有序的 shell 命令列表，按顺序逐条执行。
/// 测试序列的最后一条命令以测试运行器的退出码退出。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CommandSequence(Vec<String>);

impl CommandSequence {
    /// Number of commands.
    /// 命令数量。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the sequence holds no command.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the commands in execution order.
    /// 按执行顺序遍历命令。
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// The commands as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The final command; for a test sequence, the one that exits with the runner's status.
    /// 最后一条命令；对测试序列而言，即以运行器退出码退出的那条。
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consumes the sequence, returning the commands.
    /// 消耗序列并返回命令列表。
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Joins the commands into one script, one command (or block) per line.
    /// 将命令连接成一个脚本，每行一条命令（或命令块）。
    pub fn to_script(&self) -> String {
        let mut script = self.0.join("\n");
        script.push('\n');
        script
    }
}

impl From<Vec<String>> for CommandSequence {
    fn from(commands: Vec<String>) -> Self {
        Self(commands)
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
