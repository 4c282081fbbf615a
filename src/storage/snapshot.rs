//! # 快照存储
//!
//! 将截面数据或共振峰结果保存到磁盘，供下次运行复用。
//!
//! ## 格式
//! JSON 文档，内容为长度为 1 的列表，唯一元素即数据对象。
//!
//! ## 依赖关系
//! - 被 `commands/sigmas.rs`, `commands/resos.rs`, `commands/plot.rs` 使用
//! - 使用 `serde_json` 序列化

use crate::error::{ResoscanError, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// 快照存储接口
pub trait SnapshotStore<T> {
    /// 保存数据
    fn save(&self, data: &T) -> Result<()>;

    /// 读取数据；快照不存在时返回 `FileNotFound`
    fn load(&self) -> Result<T>;
}

/// JSON 文件快照
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 快照文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, reason: String) -> ResoscanError {
        ResoscanError::ParseError {
            format: "snapshot".to_string(),
            path: self.path.display().to_string(),
            reason,
        }
    }
}

impl<T: Serialize + DeserializeOwned> SnapshotStore<T> for JsonSnapshot {
    fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ResoscanError::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let file = File::create(&self.path).map_err(|e| ResoscanError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &[data])?;
        writer.flush().map_err(|e| ResoscanError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    fn load(&self) -> Result<T> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResoscanError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => ResoscanError::FileReadError {
                path: self.path.display().to_string(),
                source: e,
            },
        })?;

        let mut wrapped: Vec<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| self.parse_error(e.to_string()))?;

        if wrapped.len() != 1 {
            return Err(self.parse_error(format!(
                "expected exactly one record, found {}",
                wrapped.len()
            )));
        }

        Ok(wrapped.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementSigma, IsotopeCurve, SigmaMap};

    fn sample_sigmas() -> SigmaMap {
        let e = vec![1.0, 2.0];
        let element = ElementSigma::from_isotopes(
            "Ag",
            e.clone(),
            vec![
                IsotopeCurve::new("107-Ag", 0.51839, e.clone(), vec![40.0, 630.5]),
                IsotopeCurve::new("109-Ag", 0.48161, e.clone(), vec![12.0, 7.25]),
            ],
        );
        [("Ag".to_string(), element)].into_iter().collect()
    }

    #[test]
    fn test_reload_matches_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshot::new(dir.path().join("nested").join("sigmas.json"));

        let sigmas = sample_sigmas();
        store.save(&sigmas).unwrap();
        let loaded: SigmaMap = store.load().unwrap();
        assert_eq!(loaded, sigmas);

        // 外层为长度 1 的列表
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with('['));
    }

    #[test]
    fn test_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshot::new(dir.path().join("sigmas.json"));
        let result: Result<SigmaMap> = store.load();
        assert!(matches!(result, Err(ResoscanError::FileNotFound { .. })));
    }

    #[test]
    fn test_wrong_record_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resos.json");
        fs::write(&path, "[{}, {}]").unwrap();

        let store = JsonSnapshot::new(&path);
        let result: Result<SigmaMap> = store.load();
        assert!(matches!(result, Err(ResoscanError::ParseError { .. })));

        fs::write(&path, "not json").unwrap();
        let result: Result<SigmaMap> = store.load();
        assert!(matches!(result, Err(ResoscanError::ParseError { .. })));
    }
}
