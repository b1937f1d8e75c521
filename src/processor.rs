//! 词梯处理器
//!
//! 读取词典建图（每个词一个顶点，单编辑相邻的词之间连边），
//! 预计算全源最短路径，然后回答路径/距离查询。
//!
//! 建图和预计算是两个先后的阶段：建图之后必须重新预计算，
//! 否则查询使用的是过期的索引。

use crate::algorithm::{is_adjacent, ShortestPathIndex};
use crate::config::LadderConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::import::{ImportStats, WordLoader};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// 词梯处理器
#[derive(Debug, Default)]
pub struct GraphProcessor {
    graph: Graph<String>,
    index: ShortestPathIndex<String>,
    config: LadderConfig,
    loader: WordLoader,
    /// 上次预计算之后图是否被修改过
    stale: bool,
    last_import: Option<ImportStats>,
}

impl GraphProcessor {
    /// 使用默认配置创建处理器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建处理器
    pub fn with_config(config: LadderConfig) -> Self {
        Self {
            loader: WordLoader::new(config.case_folding),
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// 图的只读视图
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 预计算索引的只读视图
    pub fn index(&self) -> &ShortestPathIndex<String> {
        &self.index
    }

    /// 索引是否过期
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// 最近一次建图的统计
    pub fn last_import_stats(&self) -> Option<&ImportStats> {
        self.last_import.as_ref()
    }

    // ==================== 建图 ====================

    /// 从词典文件建图
    ///
    /// 返回本次读取的词数（不是图中的顶点总数）。文件无法读取时返回错误，
    /// 图保持不变。
    pub fn populate_graph<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let words = self.loader.load_words(path)?;
        Ok(self.populate_from_words(words))
    }

    /// 用给定的词建图，返回读取的词数
    ///
    /// 重复的词只产生一个顶点。每次调用都会重新检测图中所有词对，
    /// 包括之前调用已经检测过的词对。
    pub fn populate_from_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        for word in words {
            let Some(word) = self.loader.normalize(word.as_ref()) else {
                continue;
            };
            stats.words_read += 1;
            if self.graph.add_vertex(word).is_ok() {
                stats.vertices_added += 1;
            }
        }

        stats.edges_added = self.connect_adjacent_pairs();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        self.stale = true;

        info!(
            words = stats.words_read,
            vertices_added = stats.vertices_added,
            edges_added = stats.edges_added,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            elapsed_ms = stats.duration_ms,
            "建图完成"
        );

        let words_read = stats.words_read;
        self.last_import = Some(stats);

        if self.config.precompute_after_populate {
            self.shortest_path_precomputation();
        }

        words_read
    }

    /// 检测所有无序词对并为相邻词对连边，返回新增边数
    fn connect_adjacent_pairs(&mut self) -> usize {
        let words: Vec<String> = self.graph.vertices().cloned().collect();
        let pairs = adjacent_pairs(&words, self.config.parallel_population);
        debug!(candidates = pairs.len(), "相邻词对检测完成");

        let mut added = 0;
        for (i, j) in pairs {
            match self.graph.add_edge(&words[i], &words[j]) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(e) => debug!(error = %e, "跳过无效边"),
            }
        }
        added
    }

    // ==================== 最短路径 ====================

    /// 重新计算全源最短路径
    pub fn shortest_path_precomputation(&mut self) {
        if self.config.parallel_precompute {
            self.index.precompute_parallel(&self.graph);
        } else {
            self.index.precompute(&self.graph);
        }
        self.stale = false;
    }

    /// 两个词之间的最短词梯（包含两端）
    ///
    /// 查询词按配置的大小写方式规范化。两词相同或不连通时返回 `None`。
    pub fn get_shortest_path(&self, word1: &str, word2: &str) -> Option<Vec<String>> {
        let from = self.loader.normalize(word1)?;
        let to = self.loader.normalize(word2)?;
        if self.stale {
            warn!("图在预计算之后被修改，查询结果可能过期");
        }
        self.index.shortest_path(&from, &to)
    }

    /// 两个词之间的最短距离（边数），无路径时返回 `None`
    pub fn get_shortest_distance(&self, word1: &str, word2: &str) -> Option<usize> {
        self.get_shortest_path(word1, word2).map(|path| path.len() - 1)
    }

    /// 两个词在图中是否直接相连
    pub fn is_adjacent(&self, word1: &str, word2: &str) -> bool {
        match (self.loader.normalize(word1), self.loader.normalize(word2)) {
            (Some(a), Some(b)) => self.graph.is_adjacent(&a, &b),
            _ => false,
        }
    }

    /// 词的邻居（排序后返回）
    pub fn neighbors(&self, word: &str) -> Result<Vec<String>> {
        let word = self.loader.normalize(word).unwrap_or_default();
        let mut neighbors: Vec<String> = self.graph.neighbors(&word)?.cloned().collect();
        neighbors.sort();
        Ok(neighbors)
    }
}

/// 找出所有单编辑相邻的无序词对（下标 i < j）
fn adjacent_pairs(words: &[String], parallel: bool) -> Vec<(usize, usize)> {
    let n = words.len();
    let pairs_from = move |i: usize| {
        (i + 1..n)
            .filter(move |&j| is_adjacent(&words[i], &words[j]))
            .map(move |j| (i, j))
    };

    if parallel {
        (0..n).into_par_iter().flat_map_iter(pairs_from).collect()
    } else {
        (0..n).flat_map(pairs_from).collect()
    }
}
