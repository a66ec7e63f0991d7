//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the generator,
//! including file system operations, shell-token validation and i18n support.
//!
//! 此模块为生成器提供基础设施服务，
//! 包括文件系统操作、shell 参数校验和国际化支持。

pub mod fs;
pub mod shell;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
