//! # 共振峰提取
//!
//! 在每个同位素的截面曲线上寻峰，整理为
//! 同位素标签 → (能量字符串 → 共振记录) 的映射。
//!
//! ## 规则
//! - 只处理以数字开头的同位素标签，按字典序遍历
//! - 丰度取自曲线自身
//! - 曲线数据损坏时直接返回错误，不跳过
//! - 同一同位素标签出现在多个元素下时返回 `DuplicateIsotope`
//!
//! ## 依赖关系
//! - 被 `commands/resos.rs` 调用
//! - 使用 `reso/peaks.rs` 寻峰
//! - 使用 `models/` 数据模型

use crate::error::{ResoscanError, Result};
use crate::models::{
    energy_key, IsotopeCurve, IsotopeResonances, ResonanceMap, ResonanceRecord, SigmaMap,
};
use crate::reso::peaks::{find_peaks, PeakCriteria};

use std::collections::HashSet;

/// 提取所有满足阈值的共振峰
pub fn get_resos(sigmas: &SigmaMap, criteria: &PeakCriteria) -> Result<ResonanceMap> {
    check_unique_labels(sigmas)?;

    let mut resos = ResonanceMap::new();

    for element in sigmas.values() {
        for label in element.isotope_labels() {
            let curve = &element.isotopes[label];
            if let Some(records) = isotope_resonances(curve, criteria)? {
                resos.insert(label.to_string(), records);
            }
        }
    }

    Ok(resos)
}

/// 同位素标签在所有元素间必须唯一，与是否有峰无关
fn check_unique_labels(sigmas: &SigmaMap) -> Result<()> {
    let mut seen = HashSet::new();
    for element in sigmas.values() {
        for label in element.isotope_labels() {
            if !seen.insert(label) {
                return Err(ResoscanError::DuplicateIsotope {
                    isotope: label.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// 单个同位素的共振峰；无峰时返回 None
pub fn isotope_resonances(
    curve: &IsotopeCurve,
    criteria: &PeakCriteria,
) -> Result<Option<IsotopeResonances>> {
    curve.validate()?;

    let peaks = find_peaks(&curve.sigma_b, criteria);
    if peaks.is_empty() {
        return Ok(None);
    }

    let records = peaks
        .iter()
        .map(|p| {
            let energy = curve.energy_ev[p.index];
            (
                energy_key(energy),
                ResonanceRecord {
                    abundance: curve.abundance,
                    energy,
                    sigma: p.height,
                },
            )
        })
        .collect();

    Ok(Some(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementSigma;

    fn energies(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    fn sigmas_of(elements: Vec<ElementSigma>) -> SigmaMap {
        elements
            .into_iter()
            .map(|e| (e.symbol.clone(), e))
            .collect()
    }

    fn spike_element() -> ElementSigma {
        let e = energies(7);
        ElementSigma::from_isotopes(
            "Fe",
            e.clone(),
            vec![
                IsotopeCurve::new(
                    "56-Fe",
                    0.9175,
                    e.clone(),
                    vec![1.0, 1.0, 1.0, 10.0, 1.0, 1.0, 1.0],
                ),
                IsotopeCurve::new("54-Fe", 0.0585, e.clone(), vec![2.0; 7]),
            ],
        )
    }

    #[test]
    fn test_single_resonance() {
        let sigmas = sigmas_of(vec![spike_element()]);
        let criteria = PeakCriteria {
            height: 5.0,
            prominence: 5.0,
        };

        let resos = get_resos(&sigmas, &criteria).unwrap();

        // 平坦曲线的 54-Fe 不出现
        assert_eq!(resos.keys().collect::<Vec<_>>(), vec!["56-Fe"]);
        let fe56 = &resos["56-Fe"];
        assert_eq!(fe56.len(), 1);

        let record = &fe56["3.0"];
        assert_eq!(record.energy, 3.0);
        assert_eq!(record.sigma, 10.0);
        assert_eq!(record.abundance, 0.9175);
    }

    #[test]
    fn test_records_match_curve_index() {
        let e: Vec<f64> = (0..9).map(|i| 0.5 + i as f64 * 0.25).collect();
        let s = vec![0.0, 80.0, 0.0, 10.0, 0.0, 0.0, 300.0, 5.0, 0.0];
        let element = ElementSigma::from_isotopes(
            "Cd",
            e.clone(),
            vec![IsotopeCurve::new("113-Cd", 0.1222, e.clone(), s.clone())],
        );

        let resos = get_resos(&sigmas_of(vec![element]), &PeakCriteria::default()).unwrap();
        let cd = &resos["113-Cd"];
        assert_eq!(cd.len(), 2);

        for record in cd.values() {
            let i = e.iter().position(|&x| x == record.energy).unwrap();
            assert_eq!(record.sigma, s[i]);
        }
        assert_eq!(cd[&energy_key(e[1])].sigma, 80.0);
        assert_eq!(cd[&energy_key(e[6])].sigma, 300.0);
    }

    #[test]
    fn test_non_isotope_labels_ignored() {
        let e = energies(5);
        let element = ElementSigma::from_isotopes(
            "Gd",
            e.clone(),
            vec![IsotopeCurve::new(
                "Gd",
                1.0,
                e.clone(),
                vec![0.0, 900.0, 0.0, 0.0, 0.0],
            )],
        );

        let resos = get_resos(&sigmas_of(vec![element]), &PeakCriteria::default()).unwrap();
        assert!(resos.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let sigmas = sigmas_of(vec![spike_element()]);
        let criteria = PeakCriteria {
            height: 5.0,
            prominence: 5.0,
        };
        let first = get_resos(&sigmas, &criteria).unwrap();
        let second = get_resos(&sigmas, &criteria).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_curve_is_fatal() {
        let e = energies(4);
        let element = ElementSigma {
            symbol: "Fe".to_string(),
            energy_ev: e.clone(),
            sigma_b: vec![0.0; 4],
            isotopes: [(
                "56-Fe".to_string(),
                IsotopeCurve::new("56-Fe", 0.9, e.clone(), vec![0.0, 100.0, 0.0]),
            )]
            .into_iter()
            .collect(),
        };

        let err = get_resos(&sigmas_of(vec![element]), &PeakCriteria::default()).unwrap_err();
        assert!(matches!(err, ResoscanError::DataIntegrity { .. }));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let e = energies(3);
        let spike = vec![0.0, 100.0, 0.0];
        let a = ElementSigma::from_isotopes(
            "Fe",
            e.clone(),
            vec![IsotopeCurve::new("56-Fe", 0.9, e.clone(), spike.clone())],
        );
        let mut b = a.clone();
        b.symbol = "Fe2".to_string();

        let err = get_resos(&sigmas_of(vec![a, b]), &PeakCriteria::default()).unwrap_err();
        assert!(matches!(err, ResoscanError::DuplicateIsotope { .. }));
    }

    #[test]
    fn test_duplicate_label_without_peaks_rejected() {
        let e = energies(3);
        let a = ElementSigma::from_isotopes(
            "Fe",
            e.clone(),
            vec![IsotopeCurve::new("56-Fe", 0.9, e.clone(), vec![0.0, 100.0, 0.0])],
        );
        // 第二份数据没有峰，标签冲突仍然报错
        let b = ElementSigma::from_isotopes(
            "Fe2",
            e.clone(),
            vec![IsotopeCurve::new("56-Fe", 0.9, e.clone(), vec![1.0; 3])],
        );

        let err = get_resos(&sigmas_of(vec![a, b]), &PeakCriteria::default()).unwrap_err();
        assert!(matches!(err, ResoscanError::DuplicateIsotope { ref isotope } if isotope == "56-Fe"));
    }
}
