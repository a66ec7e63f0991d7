//! # Initialization Module / 初始化模块
//!
//! This module implements the `init` command. It writes a `Pipeline.toml`
//! holding the default pipeline settings and a `Job.toml` describing one
//! test job, optionally asking for the job's details through an
//! interactive wizard.
//!
//! 此模块实现 `init` 命令。它写入包含默认流水线设置的 `Pipeline.toml`，
//! 以及描述一个测试作业的 `Job.toml`，并可通过交互式向导询问作业细节。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the project, strategy and components
//! - **Overwrite Protection**: Confirmation prompts (or `--force`) before overwriting
//!
//! - **交互式向导**: 询问项目、执行策略和组件
//! - **覆盖保护**: 覆盖现有文件前需要确认（或使用 `--force`）

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::Serialize;
use std::path::Path;

use crate::core::config::PipelineConfig;
use crate::core::models::{ExecutionStrategy, JobSpec, PlatformDescriptor};
use crate::infra::{fs, t};

pub const PIPELINE_FILE: &str = "Pipeline.toml";
pub const JOB_FILE: &str = "Job.toml";

/// Runs the `init` command in the current directory.
///
/// # Arguments / 参数
/// * `language` - The language locale to use for messages / 用于消息的语言区域设置
/// * `non_interactive` - Write defaults without prompting / 不提示，直接写入默认值
/// * `force` - Overwrite existing files without asking / 不询问，直接覆盖已有文件
pub fn run_init_wizard(language: &str, non_interactive: bool, force: bool) -> Result<()> {
    init_in(Path::new("."), language, non_interactive, force)
}

/// Runs the `init` command, writing the files into `dir`.
///
/// In non-interactive mode existing files are kept unless `force` is set.
/// 非交互模式下，除非设置了 `force`，否则保留已有文件。
pub fn init_in(dir: &Path, language: &str, non_interactive: bool, force: bool) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = language));
    }

    let job = if non_interactive {
        default_job()
    } else {
        prompt_job(&theme, language)?
    };

    write_if_allowed(
        &dir.join(PIPELINE_FILE),
        &PipelineConfig::default(),
        &theme,
        language,
        non_interactive,
        force,
    )?;
    write_if_allowed(&dir.join(JOB_FILE), &job, &theme, language, non_interactive, force)?;

    println!("{}", t!("init_usage_hint", locale = language));
    Ok(())
}

/// The job written by `init --non-interactive`.
/// `init --non-interactive` 写入的作业。
pub fn default_job() -> JobSpec {
    JobSpec {
        project_folder: "UniversalGraphicsTest".to_string(),
        api: "metal".to_string(),
        test_platform_args: "--suite=playmode".to_string(),
        strategy: ExecutionStrategy::NonStandalone,
        platform: PlatformDescriptor::new(vec!["editor".to_string(), "il2cpp".to_string()]),
    }
}

fn prompt_job(theme: &ColorfulTheme, language: &str) -> Result<JobSpec> {
    let defaults = default_job();

    let project_folder: String = Input::with_theme(theme)
        .with_prompt(t!("init_project_prompt", locale = language))
        .default(defaults.project_folder)
        .interact_text()?;

    let strategy_names: Vec<&str> = ExecutionStrategy::ALL.iter().map(|s| s.as_str()).collect();
    let strategy_index = Select::with_theme(theme)
        .with_prompt(t!("init_strategy_prompt", locale = language))
        .items(&strategy_names)
        .default(0)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let components: String = Input::with_theme(theme)
        .with_prompt(t!("init_components_prompt", locale = language))
        .default(defaults.platform.components.join(","))
        .interact_text()?;

    let test_platform_args: String = Input::with_theme(theme)
        .with_prompt(t!("init_test_args_prompt", locale = language))
        .default(defaults.test_platform_args)
        .allow_empty(true)
        .interact_text()?;

    Ok(JobSpec {
        project_folder,
        api: defaults.api,
        test_platform_args,
        strategy: ExecutionStrategy::ALL[strategy_index],
        platform: PlatformDescriptor::new(parse_components(&components)),
    })
}

/// Splits a comma-separated component list, dropping empty entries.
/// 拆分以逗号分隔的组件列表，并丢弃空项。
pub fn parse_components(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_if_allowed<T: Serialize>(
    path: &Path,
    value: &T,
    theme: &ColorfulTheme,
    language: &str,
    non_interactive: bool,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        let overwrite = if non_interactive {
            false
        } else {
            Confirm::with_theme(theme)
                .with_prompt(t!("init_overwrite_prompt", locale = language, path = path.display()))
                .default(false)
                .interact()
                .context(t!("init_user_confirmation_failed", locale = language).to_string())?
        };
        if !overwrite {
            println!(
                "{}",
                t!("init_skipped_existing", locale = language, path = path.display()).yellow()
            );
            return Ok(());
        }
    }

    let toml_string = toml::to_string_pretty(value)
        .context(t!("init_serialize_failed", locale = language).to_string())?;
    fs::write_output(path, &toml_string)?;

    println!(
        "{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    Ok(())
}
