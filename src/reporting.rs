//! # Reporting Module / 报告模块
//!
//! This module handles the display and serialization of generated command
//! sequences. It provides a colorful, step-labelled console listing with
//! internationalization support and renderers for plain scripts and JSON.
//!
//! 此模块处理生成的命令序列的显示和序列化。
//! 它提供带步骤标签的彩色控制台列表（支持国际化），以及纯脚本和 JSON 渲染器。

pub mod console;
pub mod render;

// Re-export common reporting functions
pub use console::print_sequence;
pub use render::{render, OutputFormat};
