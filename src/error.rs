//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("不允许自环边: {0}")]
    SelfLoop(String),

    #[error("边不存在: {0} -- {1}")]
    EdgeNotFound(String, String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 是否为顶点/边层面的输入错误（而非资源错误）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_)
                | Error::VertexAlreadyExists(_)
                | Error::SelfLoop(_)
                | Error::EdgeNotFound(_, _)
        )
    }
}
