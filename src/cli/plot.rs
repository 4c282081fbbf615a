//! # plot 子命令 CLI 定义
//!
//! 绘制单个元素或同位素的截面曲线并标出共振峰。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::library::{LibraryArgs, RetrievalArgs};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图表输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (energy, cross section)
    Csv,
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Element symbol to plot (e.g. Cd)
    pub element: String,

    /// Isotope label to plot (e.g. 113-Cd); the element total is plotted if omitted
    #[arg(short, long)]
    pub isotope: Option<String>,

    #[command(flatten)]
    pub library: LibraryArgs,

    #[command(flatten)]
    pub retrieval: RetrievalArgs,

    /// Cross-section snapshot; read if present, otherwise data comes from the library
    #[arg(long, default_value = "sigmas.json")]
    pub sigmas: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "sigma.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotOutputFormat>,

    /// Minimum peak height (barn)
    #[arg(long, default_value_t = 50.0)]
    pub height: f64,

    /// Minimum peak prominence (barn)
    #[arg(long, default_value_t = 25.0)]
    pub prominence: f64,

    /// Label resonances with their energies
    #[arg(long, default_value_t = false)]
    pub label_peaks: bool,

    /// Number of tallest resonances to label (if --label-peaks is set)
    #[arg(long, default_value_t = 10)]
    pub label_count: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub fig_height: u32,

    /// Title for the plot (default: isotope or element name)
    #[arg(long)]
    pub title: Option<String>,
}
