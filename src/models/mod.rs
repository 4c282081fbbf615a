//! # 数据模型模块
//!
//! 定义截面曲线和共振峰结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `library/`, `reso/`, `commands/` 使用
//! - 子模块: curve, grid, resonance

pub mod curve;
pub mod grid;
pub mod resonance;

pub use curve::{ElementSigma, IsotopeCurve, SigmaMap};
pub use grid::EnergyGrid;
pub use resonance::{energy_key, IsotopeResonances, ResonanceMap, ResonanceRecord};
