//! 配置
//!
//! 词典规范化方式和并行开关，可从 JSON 文件加载

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 大小写折叠方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    /// 统一转为大写
    #[default]
    Upper,
    /// 统一转为小写
    Lower,
    /// 保持原样
    Preserve,
}

impl CaseFolding {
    /// 对单个词做大小写折叠
    pub fn apply(&self, word: &str) -> String {
        match self {
            CaseFolding::Upper => word.to_uppercase(),
            CaseFolding::Lower => word.to_lowercase(),
            CaseFolding::Preserve => word.to_string(),
        }
    }
}

/// 词梯配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// 词的大小写折叠方式
    pub case_folding: CaseFolding,
    /// 建图时并行检测词对
    pub parallel_population: bool,
    /// 并行做最短路径预计算
    pub parallel_precompute: bool,
    /// 每次建图后自动预计算
    pub precompute_after_populate: bool,
}

impl LadderConfig {
    /// 从 JSON 文件加载配置
    ///
    /// 文件不存在时返回默认配置。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("读取配置文件 '{}' 失败: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("解析配置文件 '{}' 失败: {}", path.display(), e))
        })
    }

    /// 保存为 JSON 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::SerializationError(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn with_case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }

    /// 同时打开建图和预计算的并行开关
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel_population = parallel;
        self.parallel_precompute = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LadderConfig::default();
        assert_eq!(config.case_folding, CaseFolding::Upper);
        assert!(!config.parallel_population);
        assert!(!config.precompute_after_populate);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(CaseFolding::Upper.apply("Cat"), "CAT");
        assert_eq!(CaseFolding::Lower.apply("Cat"), "cat");
        assert_eq!(CaseFolding::Preserve.apply("Cat"), "Cat");
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        let config = LadderConfig::load(dir.path().join("none.json")).unwrap();
        assert_eq!(config, LadderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladder.json");
        let config = LadderConfig::default()
            .with_case_folding(CaseFolding::Lower)
            .with_parallel(true);
        config.save(&path).unwrap();

        assert_eq!(LadderConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladder.json");
        std::fs::write(&path, r#"{"case_folding":"preserve"}"#).unwrap();

        let config = LadderConfig::load(&path).unwrap();
        assert_eq!(config.case_folding, CaseFolding::Preserve);
        assert!(!config.parallel_precompute);
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladder.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            LadderConfig::load(&path),
            Err(Error::ConfigError(_))
        ));
    }
}
