//! # sigmas 子命令 CLI 定义
//!
//! 检索截面数据并保存快照。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sigmas.rs`

use super::library::{LibraryArgs, RetrievalArgs};
use clap::Args;
use std::path::PathBuf;

/// sigmas 子命令参数
#[derive(Args, Debug)]
pub struct SigmasArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    #[command(flatten)]
    pub retrieval: RetrievalArgs,

    /// Elements to retrieve, comma separated (default: every element in the catalog)
    #[arg(short, long, value_delimiter = ',')]
    pub elements: Vec<String>,

    /// Snapshot file for the retrieved cross sections
    #[arg(short, long, default_value = "sigmas.json")]
    pub output: PathBuf,
}
