// Shared test helpers for integration tests
#![allow(dead_code)]

use metal_ci_commands::models::{ExecutionStrategy, JobSpec, PlatformDescriptor};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn components(names: &[&str]) -> Vec<String> {
    names.iter().map(|c| c.to_string()).collect()
}

pub fn platform(names: &[&str]) -> PlatformDescriptor {
    PlatformDescriptor::new(components(names))
}

pub fn job(project_folder: &str, strategy: ExecutionStrategy) -> JobSpec {
    JobSpec {
        project_folder: project_folder.to_string(),
        api: "metal".to_string(),
        test_platform_args: "--suite=playmode".to_string(),
        strategy,
        platform: platform(&["editor", "il2cpp"]),
    }
}

/// Writes `content` to `name` inside `temp_dir` and returns the path.
pub fn write_file(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper function to create an invalid TOML job file
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    write_file(
        temp_dir,
        "invalid.toml",
        r#"
project_folder = "Broken"
# Invalid TOML - missing closing bracket
[platform
components = []
"#,
    )
}

/// Helper function to create a job whose project folder carries shell metacharacters
pub fn create_unsafe_job(temp_dir: &TempDir) -> PathBuf {
    write_file(
        temp_dir,
        "unsafe.toml",
        r#"
project_folder = "Proj; rm -rf ~"
strategy = "not_standalone"

[platform]
components = ["editor"]
"#,
    )
}
