//! # Command Builder Module / 命令构建模块
//!
//! This module assembles the shell commands of a macOS/Metal test job. Every
//! builder is a pure function of its inputs: nothing is executed, and inputs
//! are interpolated as-is (see [`crate::infra::shell`] for the opt-in check).
//!
//! 此模块组装 macOS/Metal 测试作业的 shell 命令。每个构建器都是其输入的纯函数：
//! 不执行任何命令，输入按原样插入（可选检查见 [`crate::infra::shell`]）。
//!
//! A test sequence is laid out as:
//!
//! 1. download the test runner and make it executable
//! 2. install `unity-downloader-cli` on the device
//! 3. copy the source tree to the device
//! 4. copy the SSH key to the device
//! 5. fetch the editor and the requested components on the device
//! 6. run the tests remotely, copy the results back, exit with the runner's status

use crate::core::config::PipelineConfig;
use crate::core::error::CommandError;
use crate::core::models::{CommandSequence, PlatformDescriptor};

/// Test-runner flag added for projects that must tolerate compilation errors.
pub const COMPILATION_ERRORS_AS_WARNINGS: &str = "--compilation-errors-as-warnings";

/// Projects (lower-cased) that get [`COMPILATION_ERRORS_AS_WARNINGS`].
const COMPILATION_ERRORS_AS_WARNINGS_PROJECTS: [&str; 2] =
    ["universalhybridtest", "hdrp_hybridtests"];

/// Builds the five provisioning commands shared by every test sequence.
///
/// # Arguments
/// * `config` - Pipeline paths and remote-device settings
/// * `project_folder` - Test project directory under `test_projects_dir`
/// * `components` - Components to install with the editor, emitted as `-c <name> ` in order
///
/// # Returns
/// A `CommandSequence` of exactly five commands
///
/// 构建所有测试序列共用的五条准备命令。
pub fn build_base_commands(
    config: &PipelineConfig,
    project_folder: &str,
    components: &[String],
) -> CommandSequence {
    base_commands(config, project_folder, components).into()
}

fn base_commands(
    config: &PipelineConfig,
    project_folder: &str,
    components: &[String],
) -> Vec<String> {
    let utr = format!("{}/utr", config.local_project_dir(project_folder));
    let component_flags: String = components.iter().map(|c| format!("-c {} ", c)).collect();

    vec![
        format!(
            "curl -s {} --output {utr} && chmod +x {utr}",
            config.utr_install_url
        ),
        format!(
            "{} \"bash -lc 'pip3 install --user unity-downloader-cli --index-url {} --upgrade'\"",
            config.ssh_prefix(),
            config.unity_downloader_cli_url
        ),
        format!(
            "{} -r ${} {}:~/{}",
            config.scp_prefix(),
            config.source_dir_var,
            config.remote_host(),
            config.repository_name
        ),
        format!(
            "{} {key} {}:{key}",
            config.scp_prefix(),
            config.remote_host(),
            key = config.ssh_key
        ),
        format!(
            "{} '{} --source-file ~/{}/{} {} --wait --published-only'",
            config.ssh_prefix(),
            config.downloader_cli_bin,
            config.repository_name,
            config.path_unity_revision,
            component_flags
        ),
    ]
}

/// Builds the commands that run the tests inside the editor on the device.
/// The base commands are followed by one multi-line block that runs the
/// tests, copies the results back and exits with the runner's status.
///
/// `_api` is accepted for parity with the builders of other platforms.
///
/// 构建在设备上的编辑器中运行测试的命令。
/// 基础命令之后是一个多行命令块：运行测试、取回结果，并以运行器的退出码退出。
pub fn build_non_standalone_commands(
    config: &PipelineConfig,
    project_folder: &str,
    platform: &PlatformDescriptor,
    _api: &str,
    test_platform_args: &str,
) -> CommandSequence {
    let mut commands = base_commands(config, project_folder, &platform.components);
    commands.push(run_tests_block(config, project_folder, test_platform_args, None));
    commands.into()
}

/// Builds the commands that run the tests as a standalone player.
/// Same layout as [`build_non_standalone_commands`]; the runner arguments get
/// the platform suffix and the runner gets `--timeout`.
///
/// 构建以独立播放器方式运行测试的命令。
/// 结构与 [`build_non_standalone_commands`] 相同；运行器参数会追加平台后缀，并带上 `--timeout`。
pub fn build_standalone_commands(
    config: &PipelineConfig,
    project_folder: &str,
    platform: &PlatformDescriptor,
    _api: &str,
    test_platform_args: &str,
) -> CommandSequence {
    let runner_args = format!("{}{} ", test_platform_args, config.standalone_platform_suffix);
    let mut commands = base_commands(config, project_folder, &platform.components);
    commands.push(run_tests_block(
        config,
        project_folder,
        &runner_args,
        Some(config.standalone_timeout),
    ));
    commands.into()
}

/// Build-phase commands of a split standalone run.
///
/// No build template exists for this platform, so this always fails with
/// [`CommandError::UnsupportedConfiguration`].
///
/// 拆分的独立运行的构建阶段命令。此平台没有构建模板，因此总是返回错误。
pub fn build_standalone_build_commands(
    _config: &PipelineConfig,
    _project_folder: &str,
    platform: &PlatformDescriptor,
    _api: &str,
    _test_platform_args: &str,
) -> Result<CommandSequence, CommandError> {
    Err(CommandError::UnsupportedConfiguration {
        platform: platform.name.clone(),
        reason: "standalone_split set to true but build commands not specified".to_string(),
    })
}

/// Returns the extra test-runner flag for `project_folder`, or `""`.
///
/// Only letter case is folded; whitespace is significant.
pub fn select_extra_test_runner_flag(project_folder: &str) -> &'static str {
    let folder = project_folder.to_lowercase();
    if COMPILATION_ERRORS_AS_WARNINGS_PROJECTS.contains(&folder.as_str()) {
        COMPILATION_ERRORS_AS_WARNINGS
    } else {
        ""
    }
}

/// The remote test run: run the runner over ssh, keep its status in
/// `UTR_RESULT`, copy the results back and exit with that status.
fn run_tests_block(
    config: &PipelineConfig,
    project_folder: &str,
    runner_args: &str,
    timeout: Option<u32>,
) -> String {
    let remote_project = config.remote_project_dir(project_folder);
    let local_results = format!(
        "{}/{}/",
        config.local_project_dir(project_folder),
        config.path_test_results
    );
    let home_project = format!(
        "~/{}/{}/{}",
        config.repository_name, config.test_projects_dir, project_folder
    );
    let timeout_flag = timeout
        .map(|secs| format!(" --timeout={}", secs))
        .unwrap_or_default();
    let extra_flag = match select_extra_test_runner_flag(project_folder) {
        "" => String::new(),
        flag => format!(" {}", flag),
    };

    let run = format!(
        "{ssh} \"export UPM_REGISTRY={registry}; echo \\$UPM_REGISTRY; cd {home_project} && {home_project}/utr {runner_args} --testproject={remote_project} --editor-location={editor} --artifacts_path={remote_project}/{results}{timeout_flag}{extra_flag}\"",
        ssh = config.ssh_prefix(),
        registry = config.upm_registry,
        editor = config.editor_location,
        results = config.path_test_results,
    );

    [
        run,
        "UTR_RESULT=$?".to_string(),
        format!("mkdir -p {}", local_results),
        format!(
            "{} -r {}:{}/{}/ {}",
            config.scp_prefix(),
            config.remote_host(),
            remote_project,
            config.path_test_results,
            local_results
        ),
        "exit $UTR_RESULT".to_string(),
    ]
    .join("\n")
}
