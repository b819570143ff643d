//! ZPath 核心几何引擎
//!
//! 把外部绘图引擎产生的命令序列切分为图元，对图元求值、求交和偏移。
//!
//! # 结构
//!
//! - [`math`]：点、向量及向量扩展操作
//! - [`transform`]：仿射变换
//! - [`extents`]：可未定义的轴对齐包围盒
//! - [`primitive`]：直线、圆弧、三次贝塞尔曲线
//! - [`path`]：命令序列
//! - [`segment`]：两个 `MoveTo` 之间的连续图元序列
//!
//! # 示例
//!
//! ```rust
//! use zpath_core::prelude::*;
//!
//! let mut path = Path::new();
//! path.move_to(Point2::new(0.0, 0.0))
//!     .line_to(Point2::new(10.0, 0.0))
//!     .line_to(Point2::new(10.0, 10.0));
//!
//! let segment = Segment::from_commands(path.commands()).unwrap();
//! let offset = segment.offset(1.0).unwrap();
//! println!("Length: {}", offset.length());
//! ```

pub mod error;
pub mod extents;
pub mod math;
pub mod path;
pub mod primitive;
pub mod segment;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::error::{GeometryError, Result};
    pub use crate::extents::Extents;
    pub use crate::math::{Point2, Tolerance, Vector2, VectorExt, EPSILON};
    pub use crate::path::{Command, Path};
    pub use crate::primitive::{Arc, Curve, Line, Primitive, PrimitiveKind, Sweep};
    pub use crate::segment::{Segment, SegmentCursor};
    pub use crate::transform::Transform2D;
}
