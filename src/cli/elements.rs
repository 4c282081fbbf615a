//! # elements 子命令 CLI 定义
//!
//! 列出核数据库中的可用元素。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/elements.rs`

use super::library::LibraryArgs;
use clap::Args;

/// elements 子命令参数
#[derive(Args, Debug)]
pub struct ElementsArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    /// Number of symbols printed per line
    #[arg(long, default_value_t = 15)]
    pub per_line: usize,
}
