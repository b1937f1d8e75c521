//! 图数据结构
//!
//! 泛型无向无权图。顶点按值标识，每个顶点持有自己的邻接集合，
//! 边关系隐含在邻接集合中（对称、无自环）。

use super::edge::Edge;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// 无向无权图
#[derive(Debug, Clone)]
pub struct Graph<E> {
    /// 顶点值 -> 邻接集合
    adjacency: IndexMap<E, HashSet<E>>,
    /// 边数量（每条无向边计一次）
    edge_count: usize,
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }
}

/// 邻居迭代器（一次性）
pub struct Neighbors<'a, E> {
    inner: hash_set::Iter<'a, E>,
}

impl<'a, E> Iterator for Neighbors<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Neighbors<'_, E> {}

impl<E> Graph<E>
where
    E: Eq + Hash + Clone + Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, vertex: E) -> Result<&E> {
        if self.adjacency.contains_key(&vertex) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", vertex)));
        }

        let (index, _) = self.adjacency.insert_full(vertex, HashSet::new());
        let (added, _) = self
            .adjacency
            .get_index(index)
            .ok_or_else(|| Error::VertexNotFound(format!("#{}", index)))?;

        Ok(added)
    }

    /// 删除顶点，同时断开所有关联边
    pub fn remove_vertex(&mut self, vertex: &E) -> Result<E> {
        let (removed, neighbors) = self
            .adjacency
            .shift_remove_entry(vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", vertex)))?;

        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(&removed);
            }
        }
        self.edge_count -= neighbors.len();

        Ok(removed)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &E) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// 获取所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &E> + '_ {
        self.adjacency.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ==================== 边操作 ====================

    /// 校验边的两个端点
    fn check_endpoints(&self, a: &E, b: &E) -> Result<()> {
        if !self.adjacency.contains_key(a) {
            return Err(Error::VertexNotFound(format!("{:?}", a)));
        }
        if !self.adjacency.contains_key(b) {
            return Err(Error::VertexNotFound(format!("{:?}", b)));
        }
        if a == b {
            return Err(Error::SelfLoop(format!("{:?}", a)));
        }
        Ok(())
    }

    /// 添加无向边
    ///
    /// 边已存在时返回 `Ok(false)`，图不变。
    pub fn add_edge(&mut self, a: &E, b: &E) -> Result<bool> {
        self.check_endpoints(a, b)?;

        if let Some(set) = self.adjacency.get_mut(a) {
            if !set.insert(b.clone()) {
                return Ok(false);
            }
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(a.clone());
        }
        self.edge_count += 1;

        Ok(true)
    }

    /// 删除无向边
    pub fn remove_edge(&mut self, a: &E, b: &E) -> Result<()> {
        self.check_endpoints(a, b)?;

        let removed = self
            .adjacency
            .get_mut(a)
            .map(|set| set.remove(b))
            .unwrap_or(false);
        if !removed {
            return Err(Error::EdgeNotFound(format!("{:?}", a), format!("{:?}", b)));
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.remove(a);
        }
        self.edge_count -= 1;

        Ok(())
    }

    /// 两个顶点之间是否有边
    pub fn is_adjacent(&self, a: &E, b: &E) -> bool {
        a != b
            && self
                .adjacency
                .get(a)
                .map(|set| set.contains(b))
                .unwrap_or(false)
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 遍历所有边，每条无向边只出现一次
    pub fn edges(&self) -> impl Iterator<Item = Edge<&E>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(i, (v, set))| {
                set.iter()
                    .filter(move |n| self.adjacency.get_index_of(*n).map_or(false, |j| j > i))
                    .map(move |n| Edge::new(v, n))
            })
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居
    pub fn neighbors(&self, vertex: &E) -> Result<Neighbors<'_, E>> {
        self.adjacency
            .get(vertex)
            .map(|set| Neighbors { inner: set.iter() })
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", vertex)))
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex: &E) -> Option<usize> {
        self.adjacency.get(vertex).map(HashSet::len)
    }
}
