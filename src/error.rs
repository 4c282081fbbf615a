//! # 统一错误处理模块
//!
//! 定义 resoscan 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - 检索阶段（按元素隔离，记录后跳过）：
//!   `UnknownPhysicalProperty`, `InvalidIsotopicRatio`, `NoIsotopeData`
//! - 提取阶段（致命，向上传播）：`DataIntegrity`, `DuplicateIsotope`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// resoscan 统一错误类型
#[derive(Error, Debug)]
pub enum ResoscanError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 截面检索错误（按元素跳过）
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown {property} for element '{element}'")]
    UnknownPhysicalProperty { element: String, property: String },

    #[error("Invalid isotopic ratio for element '{element}': {reason}")]
    InvalidIsotopicRatio { element: String, reason: String },

    #[error("No isotope cross-section tables for element '{element}'")]
    NoIsotopeData { element: String },

    // ─────────────────────────────────────────────────────────────
    // 共振提取错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Corrupt cross-section data for isotope '{isotope}': {reason}")]
    DataIntegrity { isotope: String, reason: String },

    #[error("Isotope '{isotope}' appears under more than one element")]
    DuplicateIsotope { isotope: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl ResoscanError {
    /// 检索失败的可能原因提示
    pub fn likely_cause(&self) -> Option<&'static str> {
        match self {
            ResoscanError::UnknownPhysicalProperty { .. } => Some("no known density"),
            ResoscanError::InvalidIsotopicRatio { .. } => {
                Some("no known natural isotopic ratio")
            }
            ResoscanError::NoIsotopeData { .. } => Some("no cross-section tables"),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ResoscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likely_cause_by_class() {
        let density = ResoscanError::UnknownPhysicalProperty {
            element: "Tc".to_string(),
            property: "density".to_string(),
        };
        assert_eq!(density.likely_cause(), Some("no known density"));

        let ratio = ResoscanError::InvalidIsotopicRatio {
            element: "Pu".to_string(),
            reason: "no natural abundance".to_string(),
        };
        assert_eq!(ratio.likely_cause(), Some("no known natural isotopic ratio"));

        let other = ResoscanError::Other("boom".to_string());
        assert_eq!(other.likely_cause(), None);
    }
}
