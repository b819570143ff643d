//! 几何运算错误定义

use crate::primitive::PrimitiveKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 退化输入：零长度向量归一化、零半径圆弧、共线的圆弧三点等
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// 该图元类型没有实现所请求的操作
    #[error("Operation '{operation}' is not supported on {} primitives", kind.name())]
    Unsupported {
        operation: &'static str,
        kind: PrimitiveKind,
    },

    /// 命令序列违反 move/line/curve/arc/close 语法
    #[error("Malformed command sequence: {0}")]
    MalformedSequence(String),

    /// 没有命令，或者请求的分段为空
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
