//! # 共享 CLI 参数
//!
//! 核数据库位置与截面检索参数，被多个子命令复用。
//!
//! ## 依赖关系
//! - 被 `cli/sigmas.rs`, `cli/resos.rs`, `cli/plot.rs`, `cli/elements.rs` 使用

use crate::library::catalog::DEFAULT_CATALOG;
use crate::library::tables::{DEFAULT_DENSITIES, DEFAULT_RATIOS};

use clap::Args;
use std::path::PathBuf;

/// 核数据库位置
#[derive(Args, Debug, Clone)]
pub struct LibraryArgs {
    /// Directory holding the element catalog and per-isotope cross-section tables
    #[arg(long, env = "RESOSCAN_LIBRARY", default_value = "reference_data/ENDF_VII")]
    pub library: PathBuf,

    /// Element catalog file name inside the library directory
    #[arg(long, default_value = DEFAULT_CATALOG)]
    pub catalog: String,

    /// Density table file name inside the library directory
    #[arg(long, default_value = DEFAULT_DENSITIES)]
    pub densities: String,

    /// Isotopic abundance table file name inside the library directory
    #[arg(long, default_value = DEFAULT_RATIOS)]
    pub ratios: String,
}

/// 截面检索参数
#[derive(Args, Debug, Clone)]
pub struct RetrievalArgs {
    /// Minimum energy (eV)
    #[arg(long, default_value_t = 0.1)]
    pub e_min: f64,

    /// Maximum energy (eV)
    #[arg(long, default_value_t = 200.0)]
    pub e_max: f64,

    /// Energy step (eV)
    #[arg(long, default_value_t = 0.01)]
    pub e_step: f64,

    /// Sample layer thickness (mm)
    #[arg(long, default_value_t = 1.0)]
    pub thickness: f64,
}
