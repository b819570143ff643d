//! ZPath 文件格式处理
//!
//! 支持：
//! - `.zpath` 原生格式（MessagePack + Zstd）
//! - JSON 互操作
//! - 文本转储

pub mod dump;
pub mod error;
pub mod json;
pub mod native;

pub use error::FileError;
