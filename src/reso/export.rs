//! # 共振数据导出
//!
//! 导出共振峰列表和截面曲线到 CSV 格式。
//!
//! ## 支持格式
//! - 共振峰: isotope, abundance, energy_ev, sigma_b
//! - 截面曲线: energy_ev, sigma_b
//!
//! ## 依赖关系
//! - 被 `commands/resos.rs`, `commands/plot.rs` 调用
//! - 使用 `models/` 的 ResonanceMap, IsotopeCurve
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{ResoscanError, Result};
use crate::models::resonance::flatten;
use crate::models::{IsotopeCurve, ResonanceMap};

use std::path::Path;

/// 导出共振峰为 CSV 格式
pub fn resonances_to_csv(resos: &ResonanceMap, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["isotope", "abundance", "energy_ev", "sigma_b"])?;

    for (isotope, record) in flatten(resos) {
        wtr.write_record(&[
            isotope.to_string(),
            record.abundance.to_string(),
            record.energy.to_string(),
            record.sigma.to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| ResoscanError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出截面曲线为 CSV 格式
pub fn curve_to_csv(curve: &IsotopeCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["energy_ev", "sigma_b"])?;

    for (e, s) in curve.energy_ev.iter().zip(&curve.sigma_b) {
        wtr.write_record(&[e.to_string(), s.to_string()])?;
    }

    wtr.flush().map_err(|e| ResoscanError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
