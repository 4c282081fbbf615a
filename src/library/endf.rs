//! # 逐点截面库
//!
//! 从库目录读取每个同位素的逐点截面表（ENDF/B-VII 重建结果），
//! 线性插值到指定能量网格。
//!
//! ## 目录结构
//! ```text
//! <root>/
//!   _elements_list.csv
//!   _densities.csv
//!   _isotopic_ratios.csv
//!   Fe-54.csv, Fe-56.csv, ...
//! ```
//!
//! ## 依赖关系
//! - 实现 `library::CrossSectionProvider`
//! - 使用 `library/tables.rs` 读取数据表
//! - 使用 `glob` 查找同位素文件，`regex` 解析文件名

use crate::error::{ResoscanError, Result};
use crate::library::tables::{self, RatioEntry};
use crate::library::{CrossSectionProvider, ElementProperties};
use crate::models::{ElementSigma, EnergyGrid, IsotopeCurve};

use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 同位素表文件名，如 `Fe-56.csv`（亚稳态 `Ag-110m.csv` 不匹配）
static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]{0,2})-(\d{1,3})\.csv$").unwrap());

/// 同位素标签，如 `56-Fe`
static ISOTOPE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3})-([A-Z][a-z]{0,2})$").unwrap());

/// 丰度总和允许的误差
const ABUNDANCE_TOLERANCE: f64 = 1e-3;

/// 库目录中的一个同位素表
#[derive(Debug, Clone)]
struct IsotopeTable {
    label: String,
    mass_number: u32,
    path: PathBuf,
}

/// 基于库目录的截面数据来源
#[derive(Debug)]
pub struct EndfLibrary {
    root: PathBuf,
    densities: HashMap<String, f64>,
    ratios: HashMap<String, RatioEntry>,
}

impl EndfLibrary {
    /// 指定密度表和丰度表文件名打开库目录
    pub fn open_with(root: impl Into<PathBuf>, densities: &str, ratios: &str) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ResoscanError::FileNotFound {
                path: root.display().to_string(),
            });
        }

        let densities = tables::read_densities(&root.join(densities))?;
        let ratios = tables::read_isotopic_ratios(&root.join(ratios))?;

        Ok(EndfLibrary {
            root,
            densities,
            ratios,
        })
    }

    /// 库目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 查找元素的全部同位素表，按质量数排序
    fn isotope_tables(&self, symbol: &str) -> Result<Vec<IsotopeTable>> {
        let pattern = format!(
            "{}/{}-*.csv",
            glob::Pattern::escape(&self.root.display().to_string()),
            symbol
        );

        let paths = glob::glob(&pattern).map_err(|e| {
            ResoscanError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
        })?;

        let mut found: Vec<IsotopeTable> = paths
            .filter_map(|entry| entry.ok())
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                let caps = TABLE_NAME.captures(name)?;
                if &caps[1] != symbol {
                    return None;
                }
                let mass_number: u32 = caps[2].parse().ok()?;
                Some(IsotopeTable {
                    label: format!("{}-{}", mass_number, symbol),
                    mass_number,
                    path,
                })
            })
            .collect();

        found.sort_by_key(|t| t.mass_number);
        Ok(found)
    }

    /// 元素的天然组成：(质量数, 丰度表项)，仅含丰度为正的同位素
    fn natural_composition(&self, symbol: &str) -> Vec<(u32, RatioEntry)> {
        self.ratios
            .iter()
            .filter_map(|(label, entry)| {
                let caps = ISOTOPE_LABEL.captures(label)?;
                if &caps[2] != symbol || entry.abundance <= 0.0 {
                    return None;
                }
                Some((caps[1].parse().ok()?, *entry))
            })
            .collect()
    }
}

impl CrossSectionProvider for EndfLibrary {
    fn properties(&self, symbol: &str) -> Result<ElementProperties> {
        let density_g_cm3 = self
            .densities
            .get(symbol)
            .copied()
            .filter(|d| d.is_finite() && *d > 0.0)
            .ok_or_else(|| ResoscanError::UnknownPhysicalProperty {
                element: symbol.to_string(),
                property: "density".to_string(),
            })?;

        let composition = self.natural_composition(symbol);
        let total: f64 = composition.iter().map(|(_, e)| e.abundance).sum();
        if composition.is_empty() || total <= 0.0 {
            return Err(ResoscanError::InvalidIsotopicRatio {
                element: symbol.to_string(),
                reason: "no natural abundance data".to_string(),
            });
        }

        let weighted: f64 = composition
            .iter()
            .map(|(a, e)| e.abundance * e.mass_amu.unwrap_or(*a as f64))
            .sum();

        Ok(ElementProperties {
            density_g_cm3,
            molar_mass_g_mol: weighted / total,
        })
    }

    fn element_sigma(&self, symbol: &str, grid: &EnergyGrid) -> Result<ElementSigma> {
        let found = self.isotope_tables(symbol)?;
        if found.is_empty() {
            return Err(ResoscanError::NoIsotopeData {
                element: symbol.to_string(),
            });
        }

        let abundances: Vec<f64> = found
            .iter()
            .map(|t| self.ratios.get(&t.label).map_or(0.0, |r| r.abundance))
            .collect();
        check_abundances(symbol, &found, &abundances)?;

        let energies = grid.points();
        let mut curves = Vec::with_capacity(found.len());

        for (table, abundance) in found.iter().zip(abundances) {
            let (e_tab, s_tab) = tables::read_point_table(&table.path)?;
            let sigma_b = interp(&energies, &e_tab, &s_tab);
            curves.push(IsotopeCurve::new(
                table.label.clone(),
                abundance,
                energies.clone(),
                sigma_b,
            ));
        }

        Ok(ElementSigma::from_isotopes(symbol, energies, curves))
    }
}

/// 检查丰度：每项在 [0, 1] 内，总和为正且不超过 1
fn check_abundances(symbol: &str, found: &[IsotopeTable], abundances: &[f64]) -> Result<()> {
    let invalid = |reason: String| ResoscanError::InvalidIsotopicRatio {
        element: symbol.to_string(),
        reason,
    };

    for (table, a) in found.iter().zip(abundances) {
        if !(0.0..=1.0).contains(a) {
            return Err(invalid(format!("{} has abundance {}", table.label, a)));
        }
    }

    let total: f64 = abundances.iter().sum();
    if total <= 0.0 {
        return Err(invalid("no natural abundance data".to_string()));
    }
    if total > 1.0 + ABUNDANCE_TOLERANCE {
        return Err(invalid(format!("abundances sum to {:.4}", total)));
    }

    Ok(())
}

/// 线性插值，超出表格范围时取端点值
fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    let n = xp.len();
    x.iter()
        .map(|&xi| {
            if xi <= xp[0] {
                return fp[0];
            }
            if xi >= xp[n - 1] {
                return fp[n - 1];
            }

            // xp[j - 1] < xi <= xp[j]
            let j = xp.partition_point(|&v| v < xi);
            let (x0, x1) = (xp[j - 1], xp[j]);
            let (y0, y1) = (fp[j - 1], fp[j]);
            if x1 == x0 {
                y1
            } else {
                y0 + (y1 - y0) * (xi - x0) / (x1 - x0)
            }
        })
        .collect()
}
