//! # 参考数据表
//!
//! 读取密度表、同位素丰度表和逐点截面表。
//!
//! ## 文件格式
//! - `_densities.csv`: `Symbol,Density_g_cm3`（密度可为空）
//! - `_isotopic_ratios.csv`: `Isotope,Abundance[,Mass_amu]`
//! - `<Symbol>-<A>.csv`: `E_eV,Sig_b`，能量非递减
//!
//! ## 依赖关系
//! - 被 `library/endf.rs` 调用
//! - 使用 `csv` 库

use crate::error::{ResoscanError, Result};
use crate::library::open_table;

use std::collections::HashMap;
use std::path::Path;

/// 默认密度表文件名
pub const DEFAULT_DENSITIES: &str = "_densities.csv";

/// 默认丰度表文件名
pub const DEFAULT_RATIOS: &str = "_isotopic_ratios.csv";

/// 丰度表中的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEntry {
    /// 天然丰度（0-1）
    pub abundance: f64,
    /// 原子质量 (amu)
    pub mass_amu: Option<f64>,
}

/// 读取密度表：元素符号 → 密度 (g/cm³)，空值跳过
pub fn read_densities(path: &Path) -> Result<HashMap<String, f64>> {
    let mut reader = table_reader(path)?;
    let mut densities = HashMap::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let symbol = field(&record, 0, path, row, "Symbol")?;
        let value = record.get(1).map(str::trim).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        densities.insert(symbol.to_string(), parse_number(value, path, row)?);
    }

    Ok(densities)
}

/// 读取丰度表：同位素标签 → 丰度与质量
pub fn read_isotopic_ratios(path: &Path) -> Result<HashMap<String, RatioEntry>> {
    let mut reader = table_reader(path)?;
    let mut ratios = HashMap::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let label = field(&record, 0, path, row, "Isotope")?;
        let abundance = parse_number(field(&record, 1, path, row, "Abundance")?, path, row)?;
        let mass_amu = match record.get(2).map(str::trim) {
            Some(v) if !v.is_empty() => Some(parse_number(v, path, row)?),
            _ => None,
        };
        ratios.insert(
            label.to_string(),
            RatioEntry {
                abundance,
                mass_amu,
            },
        );
    }

    Ok(ratios)
}

/// 读取逐点截面表，返回 (能量, 截面)
pub fn read_point_table(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = table_reader(path)?;
    let mut energies = Vec::new();
    let mut sigmas = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let e = parse_number(field(&record, 0, path, row, "E_eV")?, path, row)?;
        let s = parse_number(field(&record, 1, path, row, "Sig_b")?, path, row)?;

        if energies.last().is_some_and(|&prev| e < prev) {
            return Err(parse_error(
                path,
                format!("energies decrease at row {}", row + 2),
            ));
        }
        energies.push(e);
        sigmas.push(s);
    }

    if energies.is_empty() {
        return Err(parse_error(path, "table has no data rows".to_string()));
    }

    Ok((energies, sigmas))
}

fn table_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    let file = open_table(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    path: &Path,
    row: usize,
    name: &str,
) -> Result<&'r str> {
    record
        .get(index)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| parse_error(path, format!("row {} is missing {}", row + 2, name)))
}

fn parse_number(value: &str, path: &Path, row: usize) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| parse_error(path, format!("row {}: '{}' is not a number", row + 2, value)))
}

fn parse_error(path: &Path, reason: String) -> ResoscanError {
    ResoscanError::ParseError {
        format: "reference table".to_string(),
        path: path.display().to_string(),
        reason,
    }
}
