//! # Generate Command Module / 生成命令模块
//!
//! This module implements the `generate` command, which loads a pipeline
//! configuration and a job description, builds the job's command sequence
//! and writes it to stdout or a file. Progress messages and the step
//! listing go to stderr so stdout carries only the rendered commands.
//!
//! 此模块实现 `generate` 命令：加载流水线配置和作业描述，
//! 构建作业的命令序列，并将其写到标准输出或文件。

use anyhow::{Context, Result};
use colored::*;
use std::io::Write;

use crate::{
    core::{
        config::{self, PipelineConfig},
        models::{self, JobSpec},
        planner,
    },
    infra::{fs, t},
    reporting::{console::print_sequence, render, OutputFormat},
};

/// Arguments of the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the job description file
    pub job: String,
    /// Path to the pipeline configuration file
    pub config: String,
    /// `true` when `config` was not given on the command line
    pub config_is_default: bool,
    pub format: OutputFormat,
    /// Destination file; stdout when `None`
    pub output: Option<String>,
    /// Suppresses the labelled listing
    pub quiet: bool,
}

/// Executes the generate command with the provided arguments.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// A Result indicating success, or the first error met while loading,
/// planning or writing
pub fn execute(args: GenerateArgs, locale: &str) -> Result<()> {
    let pipeline = load_pipeline(&args, locale)?;

    let job_path = fs::expand_path(&args.job)?;
    if !args.quiet {
        eprintln!(
            "{}",
            t!("loading_job", locale = locale, path = job_path.display())
        );
    }
    let job = models::load_job_spec(&job_path)?;

    let commands = generate_commands(&pipeline, &job)
        .with_context(|| t!("generation_failed", locale = locale, project = job.project_folder))?;

    if !args.quiet {
        print_sequence(&commands, &job, locale);
        eprintln!(
            "\n{}",
            t!("generated_commands", locale = locale, count = commands.len()).green()
        );
    }

    let rendered = render(&commands, args.format)?;
    match &args.output {
        Some(raw) => {
            let output_path = fs::expand_path(raw)?;
            fs::write_output(&output_path, &rendered)?;
            if !args.quiet {
                eprintln!(
                    "{}",
                    t!("output_written", locale = locale, path = output_path.display()).green()
                );
            }
        }
        None => {
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write commands to stdout")?;
        }
    }

    Ok(())
}

/// Builds the command sequence of `job`, turning builder errors into `anyhow` errors.
pub fn generate_commands(
    pipeline: &PipelineConfig,
    job: &JobSpec,
) -> Result<models::CommandSequence> {
    Ok(planner::plan_commands(pipeline, job)?)
}

/// Loads the pipeline configuration.
/// A missing file is only accepted when the path is the default one.
fn load_pipeline(args: &GenerateArgs, locale: &str) -> Result<PipelineConfig> {
    let config_path = fs::expand_path(&args.config)?;

    if args.config_is_default && !fs::is_file(&config_path) {
        if !args.quiet {
            eprintln!(
                "{}",
                t!("pipeline_config_default", locale = locale, path = config_path.display())
                    .yellow()
            );
        }
        return Ok(PipelineConfig::default());
    }

    if !args.quiet {
        eprintln!(
            "{}",
            t!("loading_pipeline_config", locale = locale, path = config_path.display())
        );
    }
    config::load_pipeline_config(&config_path)
}
