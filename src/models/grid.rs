//! # 能量网格
//!
//! 等间距能量点：`min + i * step`，`i = 0..=round((max - min) / step)`。
//!
//! ## 依赖关系
//! - 被 `library/endf.rs`, `reso/retriever.rs` 使用

use crate::error::{ResoscanError, Result};

/// 能量网格 (eV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for EnergyGrid {
    fn default() -> Self {
        EnergyGrid {
            min: 0.1,
            max: 200.0,
            step: 0.01,
        }
    }
}

impl EnergyGrid {
    /// 创建并检查能量网格
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ResoscanError::InvalidRange(format!(
                "{}-{} eV step {} (values must be finite)",
                min, max, step
            )));
        }
        if min < 0.0 || max <= min {
            return Err(ResoscanError::InvalidRange(format!(
                "{}-{} eV (must be 0 <= min < max)",
                min, max
            )));
        }
        if step <= 0.0 {
            return Err(ResoscanError::InvalidRange(format!(
                "step {} eV (must be positive)",
                step
            )));
        }

        Ok(EnergyGrid { min, max, step })
    }

    /// 网格点数
    pub fn len(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// 生成全部能量点
    pub fn points(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_include_endpoints() {
        let grid = EnergyGrid::new(1.0, 2.0, 0.25).unwrap();
        assert_eq!(grid.len(), 5);
        let points = grid.points();
        assert_eq!(points.first().copied(), Some(1.0));
        assert!((points[4] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_grid_size() {
        let grid = EnergyGrid::default();
        assert_eq!(grid.len(), 19991);
    }

    #[test]
    fn test_invalid_grids() {
        assert!(EnergyGrid::new(5.0, 1.0, 0.1).is_err());
        assert!(EnergyGrid::new(1.0, 1.0, 0.1).is_err());
        assert!(EnergyGrid::new(-1.0, 1.0, 0.1).is_err());
        assert!(EnergyGrid::new(0.1, 1.0, 0.0).is_err());
        assert!(EnergyGrid::new(0.1, f64::INFINITY, 0.1).is_err());
    }
}
