//! 二维仿射变换
//!
//! 内部使用 3x3 齐次矩阵存储，分量顺序与 cairo 矩阵一致：
//!
//! ```text
//! x' = xx * x + xy * y + x0
//! y' = yx * x + yy * y + y0
//! ```

use crate::math::{Point2, Vector2, EPSILON};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// 二维仿射变换
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    matrix: Matrix3<f64>,
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new_translation(&Vector2::new(dx, dy)),
        }
    }

    /// 绕原点旋转（弧度，逆时针）
    pub fn rotation(angle: f64) -> Self {
        Self {
            matrix: Matrix3::new_rotation(angle),
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)),
        }
    }

    /// 按 cairo 的分量顺序构造
    pub fn from_components(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                xx, xy, x0, //
                yx, yy, y0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 先应用 `self`，再应用 `other`
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// 逆变换，奇异矩阵返回 `None`
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// 变换点（完整仿射变换）
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        self.matrix.transform_point(point)
    }

    /// 变换向量（只应用线性部分，忽略平移）
    pub fn transform_vector(&self, vector: &Vector2) -> Vector2 {
        self.matrix.transform_vector(vector)
    }

    /// 线性部分的行列式
    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    /// 是否为相似变换（旋转 + 等比缩放 + 平移，允许镜像）
    ///
    /// 只有相似变换能把圆映射为圆。
    pub fn is_similarity(&self) -> bool {
        let m = &self.matrix;
        let col_x = Vector2::new(m[(0, 0)], m[(1, 0)]);
        let col_y = Vector2::new(m[(0, 1)], m[(1, 1)]);
        let scale = col_x.norm_squared().max(col_y.norm_squared()).max(1.0);

        col_x.dot(&col_y).abs() <= EPSILON * scale
            && (col_x.norm_squared() - col_y.norm_squared()).abs() <= EPSILON * scale
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
