//! 词典导入模块
//!
//! 从词典文件读取词：每行一个词，去除首尾空白、丢弃空行、统一大小写

use crate::config::CaseFolding;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// 本次读取的词数（含重复）
    pub words_read: usize,
    /// 新增顶点数
    pub vertices_added: usize,
    /// 新增边数
    pub edges_added: usize,
    pub duration_ms: u64,
}

/// 词典读取器
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLoader {
    case_folding: CaseFolding,
}

impl WordLoader {
    /// 创建读取器
    pub fn new(case_folding: CaseFolding) -> Self {
        Self { case_folding }
    }

    /// 规范化单行，空行返回 `None`
    pub fn normalize(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.case_folding.apply(trimmed))
        }
    }

    /// 从任意输入流读取词
    pub fn read_words<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            if let Some(word) = self.normalize(&line?) {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// 从词典文件读取词
    pub fn load_words<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "词典文件无法读取");
            e
        })?;

        let words = self.read_words(BufReader::new(file))?;
        debug!(path = %path.display(), words = words.len(), "词典读取完成");
        Ok(words)
    }
}
