//! # 截面曲线数据模型
//!
//! 存储每个同位素的能量-截面曲线及其天然丰度。
//!
//! ## 设计
//! - 丰度直接保存在 `IsotopeCurve` 中，不依赖排序位置对应
//! - `SigmaMap` 为单层映射：元素符号 → `ElementSigma`
//!
//! ## 依赖关系
//! - 被 `library/endf.rs`, `reso/` 使用
//! - 被 `storage/snapshot.rs` 序列化

use crate::error::{ResoscanError, Result};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 元素符号 → 元素截面数据
pub type SigmaMap = BTreeMap<String, ElementSigma>;

/// 同位素标签是否以质量数开头（如 "56-Fe"）
pub fn is_isotope_label(label: &str) -> bool {
    label.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// 单个同位素的截面曲线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeCurve {
    /// 同位素标签（如 "56-Fe"）
    pub label: String,

    /// 天然丰度（0-1）
    pub abundance: f64,

    /// 能量 (eV)
    pub energy_ev: Vec<f64>,

    /// 截面 (barn)
    pub sigma_b: Vec<f64>,
}

impl IsotopeCurve {
    pub fn new(
        label: impl Into<String>,
        abundance: f64,
        energy_ev: Vec<f64>,
        sigma_b: Vec<f64>,
    ) -> Self {
        IsotopeCurve {
            label: label.into(),
            abundance,
            energy_ev,
            sigma_b,
        }
    }

    /// 检查曲线数据完整性
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| ResoscanError::DataIntegrity {
            isotope: self.label.clone(),
            reason,
        };

        if self.sigma_b.is_empty() {
            return Err(fail("cross-section sequence is empty".to_string()));
        }
        if self.sigma_b.len() != self.energy_ev.len() {
            return Err(fail(format!(
                "{} cross-section values but {} energies",
                self.sigma_b.len(),
                self.energy_ev.len()
            )));
        }
        if let Some(i) = self.sigma_b.iter().position(|v| !v.is_finite()) {
            return Err(fail(format!("non-finite cross section at index {}", i)));
        }
        if let Some(i) = self.energy_ev.iter().position(|v| !v.is_finite()) {
            return Err(fail(format!("non-finite energy at index {}", i)));
        }
        if !(0.0..=1.0).contains(&self.abundance) {
            return Err(fail(format!(
                "abundance {} outside [0, 1]",
                self.abundance
            )));
        }

        Ok(())
    }
}

/// 单个元素的截面数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSigma {
    /// 元素符号
    pub symbol: String,

    /// 共享能量网格 (eV)
    pub energy_ev: Vec<f64>,

    /// 丰度加权的元素截面 (barn)
    pub sigma_b: Vec<f64>,

    /// 同位素标签 → 曲线
    pub isotopes: BTreeMap<String, IsotopeCurve>,
}

impl ElementSigma {
    /// 由同位素曲线构建，并计算丰度加权截面 σ = Σ aᵢσᵢ
    pub fn from_isotopes(
        symbol: impl Into<String>,
        energy_ev: Vec<f64>,
        curves: Vec<IsotopeCurve>,
    ) -> Self {
        let mut sigma_b = vec![0.0; energy_ev.len()];
        for curve in &curves {
            for (total, s) in sigma_b.iter_mut().zip(&curve.sigma_b) {
                *total += curve.abundance * s;
            }
        }

        let isotopes = curves
            .into_iter()
            .map(|c| (c.label.clone(), c))
            .collect();

        ElementSigma {
            symbol: symbol.into(),
            energy_ev,
            sigma_b,
            isotopes,
        }
    }

    /// 以数字开头的同位素标签，按字典序排列
    pub fn isotope_labels(&self) -> Vec<&str> {
        // BTreeMap 的键本身有序
        self.isotopes
            .keys()
            .map(String::as_str)
            .filter(|label| is_isotope_label(label))
            .collect()
    }

    /// 元素总截面作为一条曲线（丰度记为 1）
    pub fn total_curve(&self) -> IsotopeCurve {
        IsotopeCurve::new(
            self.symbol.clone(),
            1.0,
            self.energy_ev.clone(),
            self.sigma_b.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<f64> {
        vec![1.0, 2.0, 3.0]
    }

    #[test]
    fn test_is_isotope_label() {
        assert!(is_isotope_label("56-Fe"));
        assert!(is_isotope_label("1-H"));
        assert!(!is_isotope_label("Fe"));
        assert!(!is_isotope_label("isotopic_ratio"));
        assert!(!is_isotope_label(""));
    }

    #[test]
    fn test_weighted_sigma() {
        let element = ElementSigma::from_isotopes(
            "B",
            grid(),
            vec![
                IsotopeCurve::new("10-B", 0.2, grid(), vec![100.0, 50.0, 10.0]),
                IsotopeCurve::new("11-B", 0.8, grid(), vec![5.0, 5.0, 5.0]),
            ],
        );

        let expected = [24.0, 14.0, 6.0];
        for (got, want) in element.sigma_b.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
        }
        assert_eq!(element.isotope_labels(), vec!["10-B", "11-B"]);
    }

    #[test]
    fn test_isotope_labels_skip_aggregates() {
        let element = ElementSigma::from_isotopes(
            "Fe",
            grid(),
            vec![
                IsotopeCurve::new("58-Fe", 0.003, grid(), vec![1.0; 3]),
                IsotopeCurve::new("Fe", 1.0, grid(), vec![1.0; 3]),
                IsotopeCurve::new("54-Fe", 0.058, grid(), vec![1.0; 3]),
            ],
        );
        assert_eq!(element.isotope_labels(), vec!["54-Fe", "58-Fe"]);
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let empty = IsotopeCurve::new("56-Fe", 0.9, vec![], vec![]);
        assert!(matches!(
            empty.validate(),
            Err(ResoscanError::DataIntegrity { .. })
        ));

        let mismatched = IsotopeCurve::new("56-Fe", 0.9, grid(), vec![1.0, 2.0]);
        assert!(matches!(
            mismatched.validate(),
            Err(ResoscanError::DataIntegrity { .. })
        ));

        let nan = IsotopeCurve::new("56-Fe", 0.9, grid(), vec![1.0, f64::NAN, 2.0]);
        assert!(nan.validate().is_err());

        let bad_abundance = IsotopeCurve::new("56-Fe", 1.5, grid(), vec![1.0; 3]);
        assert!(bad_abundance.validate().is_err());

        let ok = IsotopeCurve::new("56-Fe", 0.9175, grid(), vec![1.0; 3]);
        assert!(ok.validate().is_ok());
    }
}
