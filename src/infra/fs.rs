//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as expanding user-supplied paths and writing generated output.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如展开用户提供的路径和写入生成的输出。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expands `~` and environment variables in a user-supplied path.
///
/// # Arguments
/// * `raw` - The path as typed on the command line
///
/// # Returns
/// The expanded path, or an error naming the variable that could not be resolved
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Writes `content` to `path`, creating missing parent directories.
///
/// # Arguments
/// * `path` - Destination file
/// * `content` - The text to write
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Checks if a path exists and is a regular file.
pub fn is_file(path: &Path) -> bool {
    path.exists() && path.is_file()
}
