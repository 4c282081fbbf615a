//! # resos 子命令 CLI 定义
//!
//! 从截面曲线提取共振峰。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/resos.rs`

use super::library::{LibraryArgs, RetrievalArgs};
use clap::Args;
use std::path::PathBuf;

/// resos 子命令参数
#[derive(Args, Debug)]
pub struct ResosArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    #[command(flatten)]
    pub retrieval: RetrievalArgs,

    /// Elements to retrieve, comma separated (default: every element in the catalog)
    #[arg(short, long, value_delimiter = ',')]
    pub elements: Vec<String>,

    /// Cross-section snapshot; read if present, otherwise data comes from the library
    #[arg(long, default_value = "sigmas.json")]
    pub sigmas: PathBuf,

    /// Minimum peak height (barn)
    #[arg(long, default_value_t = 50.0)]
    pub height: f64,

    /// Minimum peak prominence (barn)
    #[arg(long, default_value_t = 25.0)]
    pub prominence: f64,

    /// Number of strongest resonances to print
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,

    /// Save the cross-section and resonance snapshots
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Snapshot file for the resonances (used with --save)
    #[arg(long, default_value = "resos.json")]
    pub resos_output: PathBuf,

    /// Export all resonances to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
