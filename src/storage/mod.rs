//! # 存储模块
//!
//! 截面数据与共振峰结果的持久化。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: snapshot

pub mod snapshot;

pub use snapshot::{JsonSnapshot, SnapshotStore};
