//! # CLI Commands / CLI 命令
//!
//! - `generate` - Builds the command sequence of a job and writes it out
//! - `init` - Creates starter `Pipeline.toml` and `Job.toml` files
//!
//! - `generate` - 构建作业的命令序列并输出
//! - `init` - 创建初始的 `Pipeline.toml` 和 `Job.toml` 文件

pub mod generate;
pub mod init;
