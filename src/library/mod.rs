//! # 核数据库模块
//!
//! 提供元素目录、参考数据表和逐点截面库的读取。
//!
//! ## 依赖关系
//! - 被 `reso/retriever.rs` 和 `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: catalog, tables, endf

pub mod catalog;
pub mod endf;
pub mod tables;

pub use catalog::read_elements;
pub use endf::EndfLibrary;

use crate::error::{ResoscanError, Result};
use crate::models::{ElementSigma, EnergyGrid};

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// 构建样品层所需的元素物理性质
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProperties {
    /// 密度 (g/cm³)
    pub density_g_cm3: f64,
    /// 摩尔质量 (g/mol)
    pub molar_mass_g_mol: f64,
}

/// 截面数据来源
pub trait CrossSectionProvider {
    /// 元素物理性质；密度未知时返回 `UnknownPhysicalProperty`
    fn properties(&self, symbol: &str) -> Result<ElementProperties>;

    /// 元素各同位素在能量网格上的截面曲线
    fn element_sigma(&self, symbol: &str, grid: &EnergyGrid) -> Result<ElementSigma>;
}

/// 打开参考表文件，不存在时返回 `FileNotFound`
pub(crate) fn open_table(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ResoscanError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ResoscanError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })
}
