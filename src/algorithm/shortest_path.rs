//! 全源最短路径预计算
//!
//! 对图中每个顶点做一次单源最短路径搜索（所有边权为 1），
//! 保存每个源点的距离表和前驱表，之后的路径/距离查询只查表。

use crate::graph::Graph;
use priority_queue::PriorityQueue;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;
use tracing::{debug, info};

/// 单源最短路径结果
#[derive(Debug, Clone)]
pub struct PathMap<E> {
    /// 源点
    source: E,
    /// 顶点 -> 到源点的边数（缺失表示不可达）
    distances: HashMap<E, usize>,
    /// 顶点 -> 最短路径上的前一个顶点（源点和不可达顶点缺失）
    predecessors: HashMap<E, E>,
}

impl<E> PathMap<E>
where
    E: Eq + Hash + Clone + Debug,
{
    fn new(source: E) -> Self {
        Self {
            source,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// 从 source 出发计算单源最短路径
    ///
    /// 前沿按当前已知距离出队；距离相同的顶点出队顺序任意。
    pub fn compute(graph: &Graph<E>, source: &E) -> Self {
        let mut map = Self::new(source.clone());
        if !graph.contains_vertex(source) {
            return map;
        }

        let mut visited: HashSet<E> = HashSet::new();
        let mut frontier: PriorityQueue<E, Reverse<usize>> = PriorityQueue::new();

        map.distances.insert(source.clone(), 0);
        frontier.push(source.clone(), Reverse(0));

        while let Some((current, Reverse(distance))) = frontier.pop() {
            let Ok(neighbors) = graph.neighbors(&current) else {
                continue;
            };

            for neighbor in neighbors {
                if visited.contains(neighbor) {
                    continue;
                }
                let candidate = distance + 1;
                if candidate < map.distance(neighbor).unwrap_or(usize::MAX) {
                    map.distances.insert(neighbor.clone(), candidate);
                    map.predecessors.insert(neighbor.clone(), current.clone());
                    frontier.push_increase(neighbor.clone(), Reverse(candidate));
                }
            }

            visited.insert(current);
        }

        map
    }

    /// 源点
    pub fn source(&self) -> &E {
        &self.source
    }

    /// 到 target 的最短距离（边数）
    pub fn distance(&self, target: &E) -> Option<usize> {
        self.distances.get(target).copied()
    }

    /// target 的前驱
    pub fn predecessor(&self, target: &E) -> Option<&E> {
        self.predecessors.get(target)
    }

    /// 可达顶点数（包含源点）
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// 沿前驱链重构从源点到 target 的路径（包含两端）
    ///
    /// target 等于源点或不可达时返回 `None`。
    pub fn path_to(&self, target: &E) -> Option<Vec<E>> {
        if *target == self.source {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = self.predecessors.get(target)?;
        loop {
            path.push(current.clone());
            if *current == self.source {
                break;
            }
            current = self.predecessors.get(current)?;
        }

        path.reverse();
        Some(path)
    }
}

/// 全源最短路径索引
///
/// 图在预计算之后发生变化时，索引即过期，需要重新调用 [`precompute`]。
///
/// [`precompute`]: ShortestPathIndex::precompute
#[derive(Debug, Clone)]
pub struct ShortestPathIndex<E> {
    path_maps: HashMap<E, PathMap<E>>,
    precomputed: bool,
}

impl<E> Default for ShortestPathIndex<E> {
    fn default() -> Self {
        Self {
            path_maps: HashMap::new(),
            precomputed: false,
        }
    }
}

impl<E> ShortestPathIndex<E>
where
    E: Eq + Hash + Clone + Debug,
{
    /// 创建空索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 对每个顶点计算单源最短路径，替换全部旧数据
    pub fn precompute(&mut self, graph: &Graph<E>) {
        let start = Instant::now();

        self.path_maps = graph
            .vertices()
            .map(|source| (source.clone(), PathMap::compute(graph, source)))
            .collect();
        self.precomputed = true;

        info!(
            sources = self.path_maps.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "最短路径预计算完成"
        );
    }

    /// 并行预计算（每个源点的搜索相互独立，只读访问图）
    pub fn precompute_parallel(&mut self, graph: &Graph<E>)
    where
        E: Send + Sync,
    {
        let start = Instant::now();
        let sources: Vec<&E> = graph.vertices().collect();
        debug!(sources = sources.len(), "开始并行预计算");

        self.path_maps = sources
            .par_iter()
            .map(|&source| (source.clone(), PathMap::compute(graph, source)))
            .collect();
        self.precomputed = true;

        info!(
            sources = self.path_maps.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "并行最短路径预计算完成"
        );
    }

    /// 清空索引，回到未预计算状态
    pub fn clear(&mut self) {
        self.path_maps.clear();
        self.precomputed = false;
    }

    /// 是否已预计算
    pub fn is_precomputed(&self) -> bool {
        self.precomputed
    }

    /// 源点数量
    pub fn source_count(&self) -> usize {
        self.path_maps.len()
    }

    /// 获取某个源点的单源结果
    pub fn path_map(&self, source: &E) -> Option<&PathMap<E>> {
        self.path_maps.get(source)
    }

    /// 最短路径（包含两端）
    ///
    /// 两词相同、源点未知、不可达或尚未预计算时返回 `None`。
    pub fn shortest_path(&self, from: &E, to: &E) -> Option<Vec<E>> {
        if from == to {
            return None;
        }
        self.path_maps.get(from)?.path_to(to)
    }

    /// 最短距离（路径上的边数）
    ///
    /// 无路径时返回 `None`，对应 -1 哨兵值。
    pub fn shortest_distance(&self, from: &E, to: &E) -> Option<usize> {
        self.shortest_path(from, to).map(|path| path.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_adjacent;

    fn word_graph(words: &[&str]) -> Graph<String> {
        let mut graph = Graph::new();
        for w in words {
            graph.add_vertex(w.to_string()).unwrap();
        }
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                if is_adjacent(a, b) {
                    graph.add_edge(&a.to_string(), &b.to_string()).unwrap();
                }
            }
        }
        graph
    }

    fn s(w: &str) -> String {
        w.to_string()
    }

    #[test]
    fn test_hot_dog_scenario() {
        let graph = word_graph(&["HOT", "DOT", "DOG", "LOT", "LOG", "COG"]);
        assert_eq!(graph.edge_count(), 8);

        let mut index = ShortestPathIndex::new();
        index.precompute(&graph);

        assert_eq!(index.shortest_distance(&s("HOT"), &s("DOG")), Some(2));
        assert_eq!(
            index.shortest_path(&s("HOT"), &s("DOG")),
            Some(vec![s("HOT"), s("DOT"), s("DOG")])
        );
        assert_eq!(index.shortest_distance(&s("HOT"), &s("COG")), Some(3));
    }

    #[test]
    fn test_path_is_valid_chain() {
        let graph = word_graph(&["CAT", "COT", "COG", "DOG", "COW", "DOW"]);
        let mut index = ShortestPathIndex::new();
        index.precompute(&graph);

        let path = index.shortest_path(&s("CAT"), &s("DOG")).unwrap();
        let distance = index.shortest_distance(&s("CAT"), &s("DOG")).unwrap();

        assert_eq!(path.first(), Some(&s("CAT")));
        assert_eq!(path.last(), Some(&s("DOG")));
        assert_eq!(path.len(), distance + 1);
        for pair in path.windows(2) {
            assert!(graph.is_adjacent(&pair[0], &pair[1]));
        }
        // 距离是边数，不是顶点数
        assert_eq!(distance, 3);
    }

    #[test]
    fn test_same_word_has_no_path() {
        let graph = word_graph(&["CAT", "COT"]);
        let mut index = ShortestPathIndex::new();
        index.precompute(&graph);

        assert_eq!(index.shortest_path(&s("CAT"), &s("CAT")), None);
        assert_eq!(index.shortest_distance(&s("CAT"), &s("CAT")), None);
    }

    #[test]
    fn test_disconnected_components() {
        let graph = word_graph(&["CAT", "COT", "FISH", "DISH"]);
        let mut index = ShortestPathIndex::new();
        index.precompute(&graph);

        assert_eq!(index.shortest_path(&s("CAT"), &s("FISH")), None);
        assert_eq!(index.shortest_distance(&s("CAT"), &s("DISH")), None);
        assert_eq!(index.shortest_distance(&s("FISH"), &s("DISH")), Some(1));
        assert_eq!(index.shortest_distance(&s("CAT"), &s("UNKNOWN")), None);
    }

    #[test]
    fn test_empty_index_reports_no_path() {
        let index: ShortestPathIndex<String> = ShortestPathIndex::new();
        assert!(!index.is_precomputed());
        assert_eq!(index.shortest_path(&s("CAT"), &s("COT")), None);
        assert_eq!(index.shortest_distance(&s("CAT"), &s("COT")), None);
    }

    #[test]
    fn test_path_map_tables() {
        let graph = word_graph(&["HOT", "DOT", "DOG", "LOT", "LOG", "COG"]);
        let map = PathMap::compute(&graph, &s("HOT"));

        assert_eq!(map.source(), &s("HOT"));
        assert_eq!(map.distance(&s("HOT")), Some(0));
        assert_eq!(map.predecessor(&s("HOT")), None);
        assert_eq!(map.predecessor(&s("DOT")), Some(&s("HOT")));
        assert_eq!(map.reachable_count(), 6);

        // 每个前驱的距离都恰好小 1
        for v in graph.vertices().filter(|v| **v != s("HOT")) {
            let pred = map.predecessor(v).unwrap();
            assert_eq!(map.distance(pred).unwrap() + 1, map.distance(v).unwrap());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = word_graph(&[
            "HOT", "DOT", "DOG", "LOT", "LOG", "COG", "CAT", "COT", "BRAN", "BRAIN", "RAIN",
            "TRAIN",
        ]);
        let mut sequential = ShortestPathIndex::new();
        sequential.precompute(&graph);
        let mut parallel = ShortestPathIndex::new();
        parallel.precompute_parallel(&graph);

        assert_eq!(sequential.source_count(), parallel.source_count());
        for a in graph.vertices() {
            for b in graph.vertices() {
                assert_eq!(
                    sequential.shortest_distance(a, b),
                    parallel.shortest_distance(a, b)
                );
            }
        }
    }

    #[test]
    fn test_recompute_after_mutation() {
        let mut graph = word_graph(&["CAT", "COT", "COG"]);
        let mut index = ShortestPathIndex::new();
        index.precompute(&graph);
        assert_eq!(index.shortest_distance(&s("CAT"), &s("COG")), Some(2));

        graph.remove_vertex(&s("COT")).unwrap();
        index.precompute(&graph);
        assert_eq!(index.shortest_distance(&s("CAT"), &s("COG")), None);
        assert_eq!(index.source_count(), 2);

        index.clear();
        assert!(!index.is_precomputed());
    }
}
