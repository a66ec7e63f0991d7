//! # Metal CI Commands Library / Metal CI 命令库
//!
//! This library builds the ordered shell command lists that CI jobs run to
//! execute Metal tests on a remote macOS device: installing the test runner,
//! provisioning the device over SSH, running the tests and copying the
//! results back.
//!
//! 此库生成 CI 作业在远程 macOS 设备上执行 Metal 测试所需的有序 shell 命令列表：
//! 安装测试运行器、通过 SSH 准备设备、运行测试并取回结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, data models and the command builders
//! - `infra` - File system helpers and shell-token validation
//! - `reporting` - Console listing and output rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、数据模型和命令构建器
//! - `infra` - 文件系统辅助函数和 shell 参数校验
//! - `reporting` - 控制台列表和输出渲染
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::builder;
pub use crate::core::config;
pub use crate::core::models;

/// Sets the active language for the application's messages.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
///
/// 设置应用程序消息的语言。先尝试完整匹配，再尝试语言代码，最后回退到 "en"。
pub fn set_language(locale: &str) {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.iter().any(|l| *l == locale) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.iter().any(|l| l == lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
