//! # 共振分析模块
//!
//! 提供截面检索、寻峰和共振峰提取功能。
//!
//! ## 子模块
//! - `retriever`: 样品堆栈与截面检索
//! - `peaks`: 局部极大值与突出度寻峰
//! - `extractor`: 共振峰提取与整理
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `library/`, `models/`

pub mod export;
pub mod extractor;
pub mod peaks;
pub mod plot;
pub mod retriever;

pub use extractor::get_resos;
pub use peaks::{find_peaks, Peak, PeakCriteria};
pub use retriever::{get_sigmas, Retrieval, SampleStack};
