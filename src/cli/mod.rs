//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `elements`: 列出可用元素
//! - `sigmas`: 检索截面并保存快照
//! - `resos`: 提取共振峰
//! - `plot`: 绘制截面曲线
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: library, elements, sigmas, resos, plot

pub mod elements;
pub mod library;
pub mod plot;
pub mod resos;
pub mod sigmas;

use clap::{Parser, Subcommand};

/// resoscan - 中子截面共振峰分析工具
#[derive(Parser)]
#[command(name = "resoscan")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Neutron cross-section retrieval and resonance peak extraction",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List the elements available in the nuclear-data library
    Elements(elements::ElementsArgs),

    /// Retrieve isotope cross sections and save them to a snapshot
    Sigmas(sigmas::SigmasArgs),

    /// Extract resonance peaks from isotope cross sections
    Resos(resos::ResosArgs),

    /// Plot a cross-section curve with its resonances marked
    Plot(plot::PlotArgs),
}
