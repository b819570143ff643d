//! 文件操作错误定义

use thiserror::Error;
use zpath_core::error::GeometryError;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MessagePack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 文件内容可以解码，但命令序列本身无效
    #[error("Invalid path: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
}

pub type Result<T> = std::result::Result<T, FileError>;
