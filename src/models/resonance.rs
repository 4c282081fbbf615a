//! # 共振峰结果数据模型
//!
//! 同位素标签 → (能量字符串 → 共振记录)。
//!
//! ## 依赖关系
//! - 被 `reso/extractor.rs` 生成
//! - 被 `reso/export.rs`, `commands/resos.rs` 使用

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 能量字符串 → 共振记录
pub type IsotopeResonances = BTreeMap<String, ResonanceRecord>;

/// 同位素标签 → 该同位素的共振峰
pub type ResonanceMap = BTreeMap<String, IsotopeResonances>;

/// 单个共振峰
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonanceRecord {
    /// 同位素天然丰度（0-1）
    #[serde(rename = "Abundance")]
    pub abundance: f64,

    /// 峰位能量 (eV)
    #[serde(rename = "Energy")]
    pub energy: f64,

    /// 峰高截面 (barn)
    #[serde(rename = "Sigma")]
    pub sigma: f64,
}

/// 能量键：最短往返十进制表示，始终带小数部分（如 "3.0"）
pub fn energy_key(energy: f64) -> String {
    format!("{:?}", energy)
}

/// 展平为 (同位素, 记录) 列表，按同位素与能量排序
pub fn flatten(map: &ResonanceMap) -> Vec<(&str, &ResonanceRecord)> {
    let mut rows: Vec<(&str, &ResonanceRecord)> = map
        .iter()
        .flat_map(|(iso, records)| records.values().map(move |r| (iso.as_str(), r)))
        .collect();

    // 能量字符串的字典序与数值序不一致，按数值重新排
    rows.sort_by(|a, b| a.0.cmp(b.0).then(a.1.energy.total_cmp(&b.1.energy)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_key_keeps_fraction() {
        assert_eq!(energy_key(3.0), "3.0");
        assert_eq!(energy_key(6.67), "6.67");
        assert_eq!(energy_key(0.1), "0.1");
    }

    #[test]
    fn test_flatten_orders_by_energy() {
        let mut map = ResonanceMap::new();
        let mut inner = IsotopeResonances::new();
        for e in [10.5, 2.0, 100.0] {
            inner.insert(
                energy_key(e),
                ResonanceRecord {
                    abundance: 0.5,
                    energy: e,
                    sigma: 60.0,
                },
            );
        }
        map.insert("113-Cd".to_string(), inner);

        let energies: Vec<f64> = flatten(&map).iter().map(|(_, r)| r.energy).collect();
        assert_eq!(energies, vec![2.0, 10.5, 100.0]);
    }

    #[test]
    fn test_record_uses_capitalised_keys() {
        let record = ResonanceRecord {
            abundance: 0.1222,
            energy: 0.178,
            sigma: 7000.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Abundance\""));
        assert!(json.contains("\"Energy\""));
        assert!(json.contains("\"Sigma\""));
    }
}
