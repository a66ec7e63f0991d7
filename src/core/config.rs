//! # Pipeline Configuration Module / 流水线配置模块
//!
//! This module defines [`PipelineConfig`], the explicit set of paths, URLs and
//! remote-device settings that the command builders interpolate into the
//! generated shell text. It is loaded from a TOML file; every field has a
//! default so an empty document is a valid configuration.
//!
//! 此模块定义 [`PipelineConfig`]，即命令构建器插入到生成的 shell 文本中的路径、
//! URL 和远程设备设置。它从 TOML 文件加载；每个字段都有默认值，
//! 因此空文档也是有效的配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The paths, URLs and remote-device settings used to build command lists.
/// 用于构建命令列表的路径、URL 和远程设备设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Name of the repository, also the directory it is copied to on the device.
    /// 仓库名称，也是其在设备上被复制到的目录名。
    pub repository_name: String,
    /// Directory holding the test projects, relative to the repository root.
    /// 存放测试项目的目录，相对于仓库根目录。
    pub test_projects_dir: String,
    /// Path of the editor revision pin file, relative to the repository root.
    /// 编辑器版本固定文件的路径，相对于仓库根目录。
    pub path_unity_revision: String,
    /// Directory the test runner writes its results to, relative to the project.
    /// 测试运行器写入结果的目录，相对于项目目录。
    pub path_test_results: String,
    /// Package registry exported as `UPM_REGISTRY` on the device.
    /// 在设备上导出为 `UPM_REGISTRY` 的包注册表。
    pub upm_registry: String,
    /// Python package index serving `unity-downloader-cli`.
    /// 提供 `unity-downloader-cli` 的 Python 包索引。
    pub unity_downloader_cli_url: String,
    /// Download URL of the test runner (UTR) binary.
    /// 测试运行器（UTR）二进制文件的下载地址。
    pub utr_install_url: String,
    /// Private key used for every `ssh`/`scp` call, also copied to the device.
    /// 每次 `ssh`/`scp` 调用使用的私钥，同时会被复制到设备上。
    pub ssh_key: String,
    /// User name on the remote device.
    pub remote_user: String,
    /// Environment variable holding the device address at execution time.
    /// 执行时保存设备地址的环境变量。
    pub device_ip_var: String,
    /// Environment variable holding the checked-out source directory.
    /// 保存已检出源代码目录的环境变量。
    pub source_dir_var: String,
    /// Home directory of `remote_user` on the device.
    pub remote_home: String,
    /// Where `unity-downloader-cli` installs the editor on the device.
    pub editor_location: String,
    /// Absolute path of the `unity-downloader-cli` executable on the device.
    pub downloader_cli_bin: String,
    /// Appended verbatim to the test-runner arguments in standalone runs.
    /// 在独立运行模式下原样追加到测试运行器参数之后。
    pub standalone_platform_suffix: String,
    /// Value of `--timeout` passed to the test runner in standalone runs.
    /// 独立运行模式下传递给测试运行器的 `--timeout` 值。
    pub standalone_timeout: u32,
    /// If `true`, project folders and components must be plain shell words.
    /// 如果为 `true`，项目目录和组件名必须是普通的 shell 单词。
    pub strict_inputs: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            repository_name: "Graphics".to_string(),
            test_projects_dir: "TestProjects".to_string(),
            path_unity_revision: "unity_revision.txt".to_string(),
            path_test_results: "test-results".to_string(),
            upm_registry: "https://artifactory-slo.bf.unity3d.com/artifactory/api/npm/upm-candidates"
                .to_string(),
            unity_downloader_cli_url:
                "https://artifactory.prd.it.unity3d.com/artifactory/api/pypi/pypi/simple".to_string(),
            utr_install_url:
                "https://artifactory.prd.cds.internal.unity3d.com/artifactory/unity-tools-local/utr-standalone/utr"
                    .to_string(),
            ssh_key: "~/.ssh/id_rsa_macmini".to_string(),
            remote_user: "bokken".to_string(),
            device_ip_var: "BOKKEN_DEVICE_IP".to_string(),
            source_dir_var: "YAMATO_SOURCE_DIR".to_string(),
            remote_home: "/Users/bokken".to_string(),
            editor_location: "/Users/bokken/.Editor".to_string(),
            downloader_cli_bin: "/Users/bokken/Library/Python/3.7/bin/unity-downloader-cli"
                .to_string(),
            standalone_platform_suffix: "OSX".to_string(),
            standalone_timeout: 2400,
            strict_inputs: false,
        }
    }
}

impl PipelineConfig {
    /// `user@$DEVICE_IP`, resolved by the shell when the job runs.
    /// `user@$DEVICE_IP`，在作业运行时由 shell 解析。
    pub fn remote_host(&self) -> String {
        format!("{}@${}", self.remote_user, self.device_ip_var)
    }

    /// `ssh` invocation with the key and host-key checking disabled, up to and including the host.
    pub fn ssh_prefix(&self) -> String {
        format!(
            "ssh -i {} -o \"StrictHostKeyChecking=no\" {}",
            self.ssh_key,
            self.remote_host()
        )
    }

    /// `scp` invocation with the key and host-key checking disabled, without operands.
    pub fn scp_prefix(&self) -> String {
        format!("scp -i {} -o \"StrictHostKeyChecking=no\"", self.ssh_key)
    }

    /// Local path of a test project: `<test_projects_dir>/<project_folder>`.
    pub fn local_project_dir(&self, project_folder: &str) -> String {
        format!("{}/{}", self.test_projects_dir, project_folder)
    }

    /// Absolute path of a test project on the device.
    /// 测试项目在设备上的绝对路径。
    pub fn remote_project_dir(&self, project_folder: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.remote_home, self.repository_name, self.test_projects_dir, project_folder
        )
    }
}

/// Loads and parses a `PipelineConfig` from the TOML file at `path`.
///
/// # Arguments
/// * `path` - Path to the pipeline configuration file
///
/// # Returns
/// The parsed configuration, or an error naming the file that failed
pub fn load_pipeline_config(path: &Path) -> Result<PipelineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pipeline config: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse pipeline config: {}", path.display()))
}
