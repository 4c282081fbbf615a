//! # 元素目录读取
//!
//! 从核数据库自带的参考表读取可用元素符号。
//!
//! ## 文件格式
//! CSV，第一行为表头，元素符号位于第 2 列（下标 1）。
//!
//! ## 依赖关系
//! - 被 `commands/elements.rs`, `commands/sigmas.rs` 调用
//! - 使用 `csv` 库

use crate::error::{ResoscanError, Result};
use crate::library::open_table;

use std::path::Path;

/// 默认元素目录文件名
pub const DEFAULT_CATALOG: &str = "_elements_list.csv";

/// 读取元素符号列表（不含表头）
pub fn read_elements(folder: &Path, fname: &str) -> Result<Vec<String>> {
    let path = folder.join(fname.trim_start_matches('/'));
    let file = open_table(&path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut elements = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let symbol = record.get(1).ok_or_else(|| ResoscanError::ParseError {
            format: "element catalog".to_string(),
            path: path.display().to_string(),
            reason: format!("row {} has no symbol column", row + 2),
        })?;
        elements.push(symbol.to_string());
    }

    Ok(elements)
}
