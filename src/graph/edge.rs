//! 边定义
//!
//! 无向、无权边：两个不同顶点之间的无序关系

use std::fmt;

/// 无向边
///
/// 端点顺序没有语义，`Edge::new(a, b) == Edge::new(b, a)`。
#[derive(Debug, Clone)]
pub struct Edge<E> {
    a: E,
    b: E,
}

impl<E: PartialEq> Edge<E> {
    /// 创建新边（调用方保证 a != b）
    pub fn new(a: E, b: E) -> Self {
        Self { a, b }
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (&E, &E) {
        (&self.a, &self.b)
    }

    /// 是否以 v 为端点
    pub fn contains(&self, v: &E) -> bool {
        self.a == *v || self.b == *v
    }

    /// 获取另一个端点
    pub fn other(&self, v: &E) -> Option<&E> {
        if self.a == *v {
            Some(&self.b)
        } else if self.b == *v {
            Some(&self.a)
        } else {
            None
        }
    }

    /// 拆分为端点元组
    pub fn into_endpoints(self) -> (E, E) {
        (self.a, self.b)
    }
}

impl<E: PartialEq> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<E: Eq> Eq for Edge<E> {}

impl<E: fmt::Display> fmt::Display for Edge<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
