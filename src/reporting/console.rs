//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints generated command sequences to the console,
//! labelling each step with internationalized, color-coded headers.
//!
//! 此模块将生成的命令序列打印到控制台，
//! 并用国际化、彩色的标题标注每个步骤。

use colored::*;

use crate::core::models::{CommandSequence, JobSpec};
use crate::infra::t;

/// Returns the label of the step at `index` in a test sequence.
/// 返回测试序列中位于 `index` 的步骤标签。
pub fn step_label(index: usize, locale: &str) -> String {
    match index {
        0 => t!("step.install_test_runner", locale = locale),
        1 => t!("step.install_downloader", locale = locale),
        2 => t!("step.copy_sources", locale = locale),
        3 => t!("step.copy_credentials", locale = locale),
        4 => t!("step.fetch_editor", locale = locale),
        5 => t!("step.run_tests", locale = locale),
        _ => t!("step.other", locale = locale),
    }
    .to_string()
}

/// Prints a labelled listing of `commands` generated for `job` to stderr.
///
/// # Arguments / 参数
/// * `commands` - The generated sequence
///                生成的命令序列
/// * `job` - The job the sequence was generated for
///           生成该序列的作业
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Commands for UniversalHybridTest (not_standalone, osx_metal) ---
///   [1/6] Install test runner
///         curl -s ... && chmod +x ...
///   ...
/// ```
pub fn print_sequence(commands: &CommandSequence, job: &JobSpec, locale: &str) {
    eprintln!(
        "\n{}",
        t!(
            "commands_banner",
            locale = locale,
            project = job.project_folder,
            strategy = job.strategy,
            platform = job.platform.name
        )
        .bold()
    );

    let total = commands.len();
    for (index, command) in commands.iter().enumerate() {
        eprintln!(
            "  {} {}",
            format!("[{}/{}]", index + 1, total).cyan(),
            step_label(index, locale).bold()
        );
        for line in command.lines() {
            eprintln!("        {}", line.dimmed());
        }
    }
}
